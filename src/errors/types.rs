//! Error type definitions for the playlist catalog
//!
//! The catalog engine itself has no failure mode. These types cover the
//! collaborators around it: playlist retrieval, configuration loading and
//! caller input validation.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Playlist retrieval errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Playlist retrieval errors
///
/// Every variant is a `retrieval_failed` condition from the caller's point of
/// view. The engine never produces one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Transport or filesystem failure
    #[error("Retrieval failed for {locator}: {message}")]
    RetrievalFailed { locator: String, message: String },

    /// Non-success HTTP status
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Network timeout
    #[error("Connection timeout: {url}")]
    Timeout { url: String },

    /// Body exceeded the configured limit
    #[error("Playlist too large: {size} bytes (max: {max_size})")]
    BodyTooLarge { size: usize, max_size: usize },

    /// Locator could not be interpreted
    #[error("Invalid locator: {locator} - {message}")]
    InvalidLocator { locator: String, message: String },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a retrieval failure for a locator
    pub fn retrieval_failed<L: Into<String>, M: Into<String>>(locator: L, message: M) -> Self {
        Self::RetrievalFailed {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<U: Into<String>>(url: U) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Create an HTTP status error
    pub fn http<M: Into<String>>(status: u16, message: M) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid locator error
    pub fn invalid_locator<L: Into<String>, M: Into<String>>(locator: L, message: M) -> Self {
        Self::InvalidLocator {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Short message suitable for a presentation layer error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            SourceError::Timeout { .. } => "Connection Error: the playlist server timed out",
            SourceError::Http { .. } => "Connection Error: the playlist server rejected the request",
            SourceError::BodyTooLarge { .. } => "Playlist is too large to load",
            SourceError::InvalidLocator { .. } => "Playlist location is not valid",
            SourceError::RetrievalFailed { .. } => "Connection Error",
        }
    }
}
