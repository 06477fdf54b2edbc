//! Error types for perch.

use thiserror::Error;

/// Result type alias using perch's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for perch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Bench directory fetch or contract failure
    #[error("Directory error: {0}")]
    Directory(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record rejected at the ingestion boundary
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Geolocation provider failure
    #[error("Location error: {0}")]
    Location(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
