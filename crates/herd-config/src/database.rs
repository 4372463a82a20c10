//! Entity store (libSQL) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "livestock.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://herd.turso.io`). Takes precedence
    /// over `path` when set.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store should be opened over the network.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.is_remote() {
            let known_scheme = ["libsql://", "http://", "https://"]
                .iter()
                .any(|scheme| self.url.starts_with(scheme));
            if !known_scheme {
                return Err(ConfigError::invalid(
                    "database.url",
                    format!("unsupported scheme in '{}'", self.url),
                ));
            }
        } else if self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "database.path",
                "must not be empty when no url is configured",
            ));
        }
        Ok(())
    }
}
