//! Error types for document loading

use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Document loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON document
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid TOML document
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unsupported file extension
    #[error("Unknown document format: {0}")]
    UnknownFormat(String),
}
