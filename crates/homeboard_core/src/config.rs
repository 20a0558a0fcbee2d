//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and mount seed from the environment.
//! - Validate values once, before any subsystem starts.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Invalid values are errors naming the offending variable.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::seed::SeedSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "HOMEBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "HOMEBOARD_LOG_DIR";
pub const ENV_SEED: &str = "HOMEBOARD_SEED";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.var, self.message)
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    pub seed: SeedSet,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed: SeedSet::default(),
        }
    }
}

impl CoreConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = value(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(raw.as_str()).map_err(|err| ConfigError {
                var: ENV_LOG_LEVEL,
                message: err.to_string(),
            })?;
        }
        if let Some(raw) = value(ENV_LOG_DIR) {
            let dir = normalize_log_dir(raw.as_str()).map_err(|err| ConfigError {
                var: ENV_LOG_DIR,
                message: err.to_string(),
            })?;
            config.log_dir = Some(dir);
        }
        if let Some(raw) = value(ENV_SEED) {
            config.seed = raw.parse().map_err(|message| ConfigError {
                var: ENV_SEED,
                message,
            })?;
        }

        Ok(config)
    }
}
