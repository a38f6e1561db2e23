//! Error handling for ytb-downloader

use thiserror::Error;

/// Main error type for ytb-downloader
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed share token: {0}")]
    MalformedToken(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("{message}")]
    BackendReported {
        message: String,
        correlation_id: String,
    },

    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("Format index {index} is out of range ({available} formats available)")]
    InvalidFormatIndex { index: usize, available: usize },

    #[error("Failed to open download URL: {0}")]
    Navigation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidServerUrl(err.to_string())
    }
}
