//! Error types for the contact chat agent

use thiserror::Error;

/// Result type alias for chat agent operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Error, Debug)]
pub enum ChatError {
    // =============================
    // Core Errors
    // =============================

    #[error("Submission error: {0}")]
    SubmissionError(String),

    #[error("Session not found: {0}")]
    SessionNotFound(uuid::Uuid),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
