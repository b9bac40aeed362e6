//! Error types for the moviehub REST clients.

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while calling a downstream service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The downstream service answered with a 4xx status.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// The downstream service answered with a 5xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response (connect, timeout, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot carry a path segment.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Returns the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Client { message, .. } => message.clone(),
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Transport(e) => e.to_string(),
            ClientError::InvalidUrl(url) => url.clone(),
        }
    }

    /// Returns the downstream HTTP status, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Client { status, .. } | ClientError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns true if the downstream service answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Client { status: 404, .. })
    }

    /// Returns true if the downstream service answered with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }
}
