//! Environment configuration
//!
//! `PORT` defaults to 3000 and must parse when set. The connection string
//! is read here but deliberately not required: its absence surfaces as a
//! 500 on the first request, matching the deployed behavior this service
//! replaces.

use std::env;

/// Startup configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub connection_string: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env::var("PORT").ok())?,
            connection_string: env::var("SQL_CONNECTION_STRING").ok(),
        })
    }
}

const DEFAULT_PORT: u16 = 3000;

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) if !raw.is_empty() => {
            raw.parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })
        }
        _ => Ok(DEFAULT_PORT),
    }
}
