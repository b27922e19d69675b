//! Error handling for the branding core
//!
//! Resolution itself never fails. These errors cover the edges around it:
//! configuration loading, market identifier parsing, the chain id
//! collaborator and the FFI boundary.

use thiserror::Error;

/// Branding error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrandingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BrandingError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for BrandingError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<std::str::Utf8Error> for BrandingError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::validation(format!("UTF-8 error: {}", err))
    }
}
