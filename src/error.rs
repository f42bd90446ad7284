//! Error types for bacheck

use thiserror::Error;

/// Main error type for bacheck operations
#[derive(Debug, Error)]
pub enum BacheckError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for bacheck operations
pub type Result<T> = std::result::Result<T, BacheckError>;
