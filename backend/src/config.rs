//! Server configuration and the fixed observation setup.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ObservationInstant, Observer};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
    #[error("Invalid geographic location: {0}")]
    InvalidLocation(String),
}

/// HTTP server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (always all interfaces)
    pub host: IpAddr,
    /// Listening port (default: 8000)
    pub port: u16,
    /// Directory holding `index.html` and the assets under `/static`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` (optional, default: 8000): listening port
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            ..Self::default()
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Where and when the sky is computed, plus the labels echoed in `/api/sky-data`.
///
/// Passed explicitly to [`crate::services::SkyService`]; nothing reads it from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyConfig {
    pub observer: Observer,
    pub instant: ObservationInstant,
    /// Descriptive date label, not derived from `instant`
    pub observation_date: String,
    /// Descriptive time label, not derived from `instant`
    pub observation_time: String,
}

impl SkyConfig {
    pub fn new(observer: Observer, instant: ObservationInstant) -> Self {
        let at = instant.datetime();
        Self {
            observer,
            instant,
            observation_date: at.format("%Y-%m-%d").to_string(),
            observation_time: at.format("%H:%M:%S UTC").to_string(),
        }
    }
}

impl Default for SkyConfig {
    /// London, 2024-07-01 22:00:00 UTC.
    fn default() -> Self {
        let instant = ObservationInstant::new(
            chrono::DateTime::from_timestamp(1_719_871_200, 0).unwrap_or(chrono::DateTime::UNIX_EPOCH),
        );
        Self {
            observer: Observer::london(),
            instant,
            observation_date: "2024-07-01".to_string(),
            observation_time: "22:00:00 UTC".to_string(),
        }
    }
}
