use crate::suggestion::SuggestionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Backend configuration error: {0}")]
    Configuration(String),

    #[error("Suggestion {id} not found")]
    NotFound { id: SuggestionId },
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    pub fn is_network(&self) -> bool {
        matches!(self, BackendError::Network(_))
    }

    /// HTTP status for failures that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Server { status, .. } => Some(*status),
            BackendError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Display string for the UI. Server bodies stay in `Display` and the debug log.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Network(msg) => format!("Network error: {}", msg),
            BackendError::Server { status, .. } => format!("HTTP error! status: {}", status),
            _ => self.to_string(),
        }
    }
}
