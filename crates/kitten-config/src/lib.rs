//! # kitten-config
//!
//! Layered configuration loading for Kitten Weights using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KITTEN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `kittend --config <file>`
//! 3. Project-level `./kitten.toml`
//! 4. User-level `~/.config/kitten-weights/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KITTEN_SERVER__PORT` -> `server.port`,
//! `KITTEN_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use kitten_config::KittenConfig;
//!
//! let config = KittenConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "kitten.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KittenConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KittenConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file (missing file is an error at extract time)
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("KITTEN_").split("__"))
    }

    /// Reject values that would make the server unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.general.recent_weights_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.recent_weights_limit".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kitten-weights").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = KittenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.path, "kitten_weights.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.general.recent_weights_limit, 10);
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = KittenConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port"));
    }

    #[test]
    fn zero_recent_limit_is_rejected() {
        let mut config = KittenConfig::default();
        config.general.recent_weights_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_database_path_is_rejected() {
        let mut config = KittenConfig::default();
        config.database.path = "  ".into();
        assert!(config.validate().is_err());
    }
}
