//! Error types for the leadflow pipeline

use thiserror::Error;

/// Pipeline-wide error type
#[derive(Error, Debug)]
pub enum LeadflowError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LeadflowError {
    pub fn api(msg: impl Into<String>) -> Self {
        LeadflowError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        LeadflowError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        LeadflowError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        LeadflowError::NotFound(msg.into())
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        LeadflowError::DimensionMismatch { expected, actual }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        LeadflowError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        LeadflowError::Internal(msg.into())
    }
}

/// Result type alias for leadflow operations
pub type LeadflowResult<T> = Result<T, LeadflowError>;
