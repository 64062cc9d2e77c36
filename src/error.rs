//! Error types for the command router.

use crate::expr::EvaluationError;
use crate::intent::DuplicateIntentError;

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum AriaError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Speech output error.
    #[error("speech error: {0}")]
    Speech(String),

    /// Result display error.
    #[error("display error: {0}")]
    Display(String),

    /// Persisted key-value store error.
    #[error("store error: {0}")]
    Store(String),

    /// Notification scheduling error.
    #[error("notifier error: {0}")]
    Notifier(String),

    /// Navigation error.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// External data provider (news, weather) error.
    #[error("provider error: {0}")]
    Provider(String),

    /// Intent registered twice.
    #[error(transparent)]
    DuplicateIntent(#[from] DuplicateIntentError),

    /// Arithmetic evaluation error.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AriaError>;
