//! # herd-config
//!
//! Layered configuration loading for Herd using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HERD_*` prefix, `__` as separator)
//! 2. Project-level `./herd.toml`
//! 3. User-level `~/.config/herd/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HERD_SERVER__PORT` -> `server.port`,
//! `HERD_ANALYTICS__LOW_WATER` -> `analytics.low_water`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use herd_config::HerdConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = HerdConfig::load_with_dotenv().expect("config");
//!
//! println!("serving on {}", config.server.bind_address());
//! ```

mod analytics;
mod database;
mod error;
mod server;

pub use analytics::AnalyticsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the current directory.
pub const LOCAL_CONFIG_FILE: &str = "herd.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HerdConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl HerdConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`HerdConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`HerdConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HERD_").split("__"))
    }

    /// Check every section for values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.server.validate()?;
        self.analytics.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("herd").join("config.toml"))
    }
}
