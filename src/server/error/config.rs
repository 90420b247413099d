use std::net::AddrParseError;

use thiserror::Error;

/// Startup configuration that could not be read from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnvVar(&'static str),
    #[error("LISTEN_ADDR {value:?} is not a socket address: {source}")]
    InvalidListenAddr {
        value: String,
        source: AddrParseError,
    },
    #[error("SESSION_EXPIRY_DAYS must be a positive number of days, got {0:?}")]
    InvalidSessionExpiry(String),
}
