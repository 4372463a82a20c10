//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_cors_max_age_secs() -> u64 {
    3600
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `Access-Control-Max-Age` for CORS preflight responses.
    #[serde(default = "default_cors_max_age_secs")]
    pub cors_max_age_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_max_age_secs: default_cors_max_age_secs(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host", "must not be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::invalid("server.port", "must be non-zero"));
        }
        Ok(())
    }
}
