//! Layered configuration for centrality runs.
//!
//! Values resolve from built-in defaults, then the user config
//! (`<config dir>/centra/config.toml`), then a project file (`centra.toml` in
//! the working directory, or an explicit path). CLI flags are applied on top
//! by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "centra.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Parameters for [`crate::metrics::CentralityEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityConfig {
    /// Seed for the betweenness source sample.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Upper bound on betweenness source nodes per component.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Eigenvector power-iteration budget.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Per-node eigenvector convergence tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl CentralityConfig {
    /// Check values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if `sample_size` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(AnalysisError::InvalidConfig {
                field: "sample_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sample_size: default_sample_size(),
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows kept per ranked table.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Resolve the effective config for a run.
///
/// `explicit` must exist when given; the implicit user and project files are
/// optional.
///
/// # Errors
///
/// Returns [`AnalysisError::Config`] if a file cannot be read or parsed, or if
/// `explicit` does not exist.
pub fn resolve_config(project_root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut layers: Vec<PathBuf> = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        let user = dir.join("centra/config.toml");
        if user.exists() {
            layers.push(user);
        }
    }

    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AnalysisError::Config {
                    path: path.to_path_buf(),
                    reason: "file does not exist".to_string(),
                });
            }
            layers.push(path.to_path_buf());
        }
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.exists() {
                layers.push(project);
            }
        }
    }

    load_layers(&layers)
}

/// Merge the given TOML files in order (later files win per key) on top of
/// the defaults.
///
/// # Errors
///
/// Returns [`AnalysisError::Config`] if any file cannot be read or parsed,
/// and [`AnalysisError::InvalidConfig`] if the merged values are out of range.
pub fn load_layers(paths: &[PathBuf]) -> Result<Config> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    for path in paths {
        debug!(path = %path.display(), "loading config layer");
        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let layer: toml::Value = toml::from_str(&content).map_err(|e| AnalysisError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        merge_toml(&mut merged, layer);
    }

    let config: Config = merged
        .try_into()
        .map_err(|e: toml::de::Error| AnalysisError::Config {
            path: paths.last().cloned().unwrap_or_default(),
            reason: e.to_string(),
        })?;
    config.centrality.validate()?;
    Ok(config)
}

fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_sample_size() -> usize {
    100
}

const fn default_max_iter() -> usize {
    100
}

const fn default_tolerance() -> f64 {
    1.0e-6
}

const fn default_top_k() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn defaults_match_reference_run() {
        let cfg = Config::default();
        assert_eq!(cfg.centrality.seed, 42);
        assert_eq!(cfg.centrality.sample_size, 100);
        assert_eq!(cfg.centrality.max_iter, 100);
        assert_eq!(cfg.report.top_k, 5);
    }

    #[test]
    fn no_layers_yields_defaults() {
        let cfg = load_layers(&[]).expect("empty layers");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "a.toml", "[centrality]\nseed = 7\n");
        let cfg = load_layers(&[path]).expect("load");
        assert_eq!(cfg.centrality.seed, 7);
        assert_eq!(cfg.centrality.sample_size, 100);
        assert_eq!(cfg.report.top_k, 5);
    }

    #[test]
    fn later_layers_override_per_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let user = write(
            dir.path(),
            "user.toml",
            "[centrality]\nseed = 1\nsample_size = 10\n",
        );
        let project = write(dir.path(), "project.toml", "[centrality]\nseed = 2\n");
        let cfg = load_layers(&[user, project]).expect("load");
        assert_eq!(cfg.centrality.seed, 2);
        assert_eq!(cfg.centrality.sample_size, 10);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "bad.toml", "[centrality\nseed = ");
        let err = load_layers(&[path]).expect_err("should fail");
        assert!(matches!(err, AnalysisError::Config { .. }));
    }

    #[test]
    fn wrong_type_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "bad.toml", "[report]\ntop_k = \"five\"\n");
        let err = load_layers(&[path]).expect_err("should fail");
        assert!(matches!(err, AnalysisError::Config { .. }));
    }

    #[test]
    fn zero_sample_size_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "zero.toml", "[centrality]\nsample_size = 0\n");
        let err = load_layers(&[path]).expect_err("should fail");
        assert!(matches!(
            err,
            AnalysisError::InvalidConfig {
                field: "sample_size",
                ..
            }
        ));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(CentralityConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = resolve_config(dir.path(), Some(&missing)).expect_err("should fail");
        assert!(matches!(err, AnalysisError::Config { .. }));
    }
}
