//! Process configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use itemstore_observability::{LogFormat, LogSettings};
use thiserror::Error;

pub const HOST_VAR: &str = "ITEMSTORE_HOST";
pub const PORT_VAR: &str = "ITEMSTORE_PORT";
pub const LOG_FORMAT_VAR: &str = "ITEMSTORE_LOG_FORMAT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8001;

/// Used when `RUST_LOG` is unset: request lines from the API, store mutations
/// from the item crate.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn,itemstore_api=info,itemstore_items=debug";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} must be a port number (0-65535), got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be \"json\" or \"pretty\", got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

/// Network and logging settings for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(HOST_VAR)) {
            config.host = value.parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = non_blank(lookup(PORT_VAR)) {
            config.port = value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = non_blank(lookup(LOG_FORMAT_VAR)) {
            config.log_format = value.parse().map_err(|_| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings::new(self.log_format, DEFAULT_LOG_DIRECTIVE)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
