//! Error types for phstatus.

use thiserror::Error;

/// Errors that can occur while computing or publishing a holiday status.
#[derive(Error, Debug)]
pub enum PhStatusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed calendar entry '{summary}': {reason}")]
    MalformedEntry { summary: String, reason: String },

    #[error("Status update rejected: {0}")]
    PublishRejected(String),

    #[error("Notification failed: {0}")]
    NotifyFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PhStatusError {
    pub fn malformed(summary: impl Into<String>, reason: impl Into<String>) -> Self {
        PhStatusError::MalformedEntry {
            summary: summary.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for phstatus operations.
pub type PhStatusResult<T> = Result<T, PhStatusError>;
