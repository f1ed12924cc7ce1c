//! # Runtime Configuration
//!
//! Logging settings for the demo binary. Defaults keep the log quiet so
//! stdout shows only the facade output.
//!
//! ## Environment
//!
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `FC_LOG_LEVEL` | `log_level` | `debug` |
//! | `FC_LOG_TARGET` | `with_target` | `false` |

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Environment variable overriding [`RuntimeConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "FC_LOG_LEVEL";

/// Environment variable overriding [`RuntimeConfig::with_target`].
pub const ENV_LOG_TARGET: &str = "FC_LOG_TARGET";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Log level is not one of trace, debug, info, warn, error.
    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Maximum level written to stderr.
    pub log_level: String,
    /// Include the event target (module path) in log lines.
    pub with_target: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            with_target: true,
        }
    }
}

impl RuntimeConfig {
    /// Build a config from defaults overridden by `lookup(variable)`.
    ///
    /// Unparsable `FC_LOG_TARGET` values are ignored. The log level is kept
    /// as given and checked by [`RuntimeConfig::level`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }

        if let Some(target) = lookup(ENV_LOG_TARGET) {
            if let Ok(t) = target.trim().parse() {
                config.with_target = t;
            }
        }

        config
    }

    /// The configured level as a `tracing` level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> RuntimeConfig {
    RuntimeConfig::from_lookup(|key| std::env::var(key).ok())
}
