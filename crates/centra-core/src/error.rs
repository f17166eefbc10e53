use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading a network or computing its centralities.
///
/// Every variant aborts the run; there is no partial-result recovery.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A row of the edge file could not be parsed into two labels.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// No nodes survived loading, so no centrality is computable.
    #[error("graph has no nodes after loading (every row was empty or a self-loop)")]
    EmptyGraph,

    /// Eigenvector power iteration did not settle within the iteration budget.
    #[error(
        "eigenvector centrality failed to converge for component {component} \
         ({nodes} nodes) after {iterations} iterations"
    )]
    Convergence {
        component: usize,
        nodes: usize,
        iterations: usize,
    },

    /// The edge file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but could not be read or parsed.
    #[error("failed to load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// A config value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl AnalysisError {
    /// The machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput { .. } => ErrorCode::MalformedInput,
            Self::EmptyGraph => ErrorCode::EmptyGraph,
            Self::Convergence { .. } => ErrorCode::Convergence,
            Self::Io { .. } => ErrorCode::InputUnreadable,
            Self::Config { .. } => ErrorCode::ConfigParseError,
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

/// Machine-readable error codes for scripts and agents driving the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InvalidConfig,
    InputUnreadable,
    MalformedInput,
    EmptyGraph,
    Convergence,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::InvalidConfig => "E1003",
            Self::InputUnreadable => "E2001",
            Self::MalformedInput => "E2002",
            Self::EmptyGraph => "E3001",
            Self::Convergence => "E4001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidConfig => "Invalid config value",
            Self::InputUnreadable => "Input file unreadable",
            Self::MalformedInput => "Malformed input row",
            Self::EmptyGraph => "Empty graph",
            Self::Convergence => "Eigenvector centrality did not converge",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in centra.toml and retry."),
            Self::InvalidConfig => Some("Set sample_size to at least 1."),
            Self::InputUnreadable => Some("Check the path and read permissions."),
            Self::MalformedInput => {
                Some("Each row needs exactly two non-empty comma-separated labels.")
            }
            Self::EmptyGraph => Some("Provide at least one edge between two distinct nodes."),
            Self::Convergence => Some("Raise --max-iter or loosen --tolerance."),
        }
    }

    /// Process exit status for this class of failure.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::ConfigParseError
            | Self::InvalidConfig
            | Self::InputUnreadable
            | Self::MalformedInput => 1,
            Self::EmptyGraph => 2,
            Self::Convergence => 3,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
