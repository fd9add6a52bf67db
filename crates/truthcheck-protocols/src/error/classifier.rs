//! Classifier client errors.

use thiserror::Error;

use crate::message::ErrorKind;

/// Maximum number of characters of an error body kept in the message.
pub const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    #[error("API {status}: {body}")]
    Api { status: u16, body: String },

    #[error("API {status}: {body}")]
    AuthenticationFailed { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClassifierError {
    /// Build the error for a non-success HTTP status, truncating the body.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        match status {
            401 => ClassifierError::AuthenticationFailed { status, body },
            _ => ClassifierError::Api { status, body },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ClassifierError::AuthenticationFailed { .. })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifierError::Api { .. } => ErrorKind::Transport,
            ClassifierError::AuthenticationFailed { .. } => ErrorKind::Auth,
            ClassifierError::Network(_) => ErrorKind::Network,
            ClassifierError::Parse(_) => ErrorKind::Parse,
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
