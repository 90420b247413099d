use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Days of inactivity before a session expires
    pub session_expiry_days: i64,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDR` and `SESSION_EXPIRY_DAYS` fall back to
    /// defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            optional_var("DATABASE_URL").ok_or(ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let listen_addr = optional_var("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: listen_addr.clone(),
                source,
            })?;

        let session_expiry_days = match optional_var("SESSION_EXPIRY_DAYS") {
            None => DEFAULT_SESSION_EXPIRY_DAYS,
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => return Err(ConfigError::InvalidSessionExpiry(value)),
            },
        };

        Ok(Self {
            database_url,
            listen_addr,
            session_expiry_days,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
