//! Error types for model loading.

use thiserror::Error;

/// Errors that can occur while loading a model file.
///
/// Analysis-time conditions (malformed containers, unknown targets) are
/// never errors; they surface as scan warnings or empty results.
#[derive(Debug, Error)]
pub enum ModelError {
    /// IO error reading the model file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not valid model JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// The content parsed but is not a usable model.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
