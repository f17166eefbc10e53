#![forbid(unsafe_code)]

mod chart;
mod cmd;
mod output;

use std::env;
use std::process::ExitCode;

use centra_core::AnalysisError;
use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "centra: centrality analysis for co-occurrence networks",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format. Defaults to pretty on a terminal and text when piped.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank nodes by betweenness, eigenvector, and degree centrality",
        after_help = "EXAMPLES:\n    # Top 5 heroes by each metric\n    centra analyze hero-network.csv\n\n    # Top 10 with a different sampling seed\n    centra analyze hero-network.csv --top 10 --seed 7\n\n    # Emit machine-readable output\n    centra analyze hero-network.csv --format json\n\n    # Force the bar charts when piping (charts draw in pretty mode only)\n    centra analyze hero-network.csv --format pretty | less"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Summarize the connected components of an edge file",
        after_help = "EXAMPLES:\n    centra components hero-network.csv"
    )]
    Components(cmd::components::ComponentsArgs),
}

/// Set up tracing with an env-filter and selectable output format.
///
/// `CENTRA_LOG` overrides the filter; `CENTRA_LOG_FORMAT=json` switches to
/// JSON lines. Logs always go to stderr.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CENTRA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "centra=debug,info"
        } else {
            "centra=info,warn"
        })
    });

    let format = env::var("CENTRA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Exit status for a failed command: the analysis error's class, else 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AnalysisError>()
        .and_then(|e| u8::try_from(e.code().exit_code()).ok())
        .unwrap_or(1)
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    let project_root = env::current_dir()?;
    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, output, &project_root),
        Commands::Components(ref args) => cmd::components::run_components(args, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    match run(&cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_error = err
                .downcast_ref::<AnalysisError>()
                .map_or_else(|| CliError::new(format!("{err:#}")), CliError::from);
            if let Err(render_err) = render_error(output, &cli_error) {
                error!(error = %render_err, "failed to render error");
            }
            ExitCode::from(exit_status(&err))
        }
    }
}
