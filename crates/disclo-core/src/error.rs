//! Centralized error types for Disclo.

use thiserror::Error;

/// Main error type for Disclo operations.
#[derive(Error, Debug)]
pub enum DiscloError {
    #[error("Invalid password")]
    InvalidCredential,

    #[error("{0}")]
    Upstream(String),

    #[error("Invalid URL format: {0}")]
    InvalidDownloadUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for Disclo operations.
pub type DiscloResult<T> = Result<T, DiscloError>;

impl DiscloError {
    /// Create an upstream (data source) error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create an invalid download URL error.
    pub fn invalid_url(input: impl Into<String>) -> Self {
        Self::InvalidDownloadUrl(input.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = DiscloError::upstream("connection reset by peer");
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = DiscloError::invalid_url("not-a-url-no-id");
        assert_eq!(err.to_string(), "Invalid URL format: not-a-url-no-id");
    }
}
