//! Server configuration from environment variables.
//!
//! - `LOCKRELAY_HOST`: listen address (default: "0.0.0.0")
//! - `LOCKRELAY_PORT`: listen port (default: "8000")
//! - `LOCKRELAY_INITIAL_STATUS`: starting status index, 0-2 (default: "2")

use lockrelay_core::{CoreError, StatusLabel};

pub const HOST_VAR: &str = "LOCKRELAY_HOST";
pub const PORT_VAR: &str = "LOCKRELAY_PORT";
pub const INITIAL_STATUS_VAR: &str = "LOCKRELAY_INITIAL_STATUS";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LOCKRELAY_PORT '{value}': expected a port number")]
    InvalidPort { value: String },

    #[error("invalid LOCKRELAY_INITIAL_STATUS: {0}")]
    InvalidInitialStatus(#[from] CoreError),
}

/// Listen address and initial store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub initial_status: StatusLabel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            initial_status: StatusLabel::None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: port.clone() })?;
        }

        if let Some(status) = lookup(INITIAL_STATUS_VAR) {
            config.initial_status = status.parse()?;
        }

        Ok(config)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
