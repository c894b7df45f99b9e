use std::{fs, io, path::Path, path::PathBuf};

use rootline_solvers::{Config, ConfigError};
use serde::Deserialize;
use thiserror::Error;

/// Solver settings as read from a YAML file.
///
/// Every field is optional and falls back to [`Config::default`]:
///
/// ```yaml
/// max_iters: 10000
/// derivative_step: 6.055454452393343e-6
/// derivative_tol: 1.0e-10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub max_iters: usize,
    pub derivative_step: f64,
    pub derivative_tol: f64,
}

/// Errors that can occur while loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid solver settings: {0}")]
    Invalid(#[from] ConfigError),
}

impl Default for EngineConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            max_iters: config.max_iters(),
            derivative_step: config.derivative_step(),
            derivative_tol: config.derivative_tol(),
        }
    }
}

impl EngineConfig {
    /// Parses a config from YAML text. Blank text gives the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Parse`] for malformed YAML or unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigLoadError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Read`] if the file cannot be read, or
    /// [`ConfigLoadError::Parse`] if its content is not a valid config.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_owned(),
            source,
        })?;

        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Validates these settings into a solver [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Invalid`] if `max_iters` is zero or a
    /// derivative setting is out of range.
    pub fn solver_config(&self) -> Result<Config, ConfigLoadError> {
        Ok(Config::new(
            self.max_iters,
            self.derivative_step,
            self.derivative_tol,
        )?)
    }
}
