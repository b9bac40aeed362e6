//! Server and networking configuration types.

use std::net::SocketAddr;

use serde::Deserialize;

/// Default port for the movie-info service.
pub const DEFAULT_MOVIE_INFO_PORT: u16 = 8080;
/// Default port for the movie-review service.
pub const DEFAULT_REVIEW_PORT: u16 = 8081;
/// Default port for the movies aggregation service.
pub const DEFAULT_MOVIES_PORT: u16 = 8082;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {host}:{port}: {source}")]
    InvalidAddress {
        host: String,
        port: u16,
        source: std::net::AddrParseError,
    },
}

/// Server configuration.
///
/// All three services read the same file; each binary picks its own port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port for the movie-info REST service.
    pub movie_info_port: u16,
    /// Port for the movie-review REST service.
    pub review_port: u16,
    /// Port for the movies aggregation REST service.
    pub movies_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            movie_info_port: DEFAULT_MOVIE_INFO_PORT,
            review_port: DEFAULT_REVIEW_PORT,
            movies_port: DEFAULT_MOVIES_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` into a socket address.
    pub fn listen_addr(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, port)
            .parse()
            .map_err(|source| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port,
                source,
            })
    }
}
