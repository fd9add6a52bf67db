//! Errors seen by the page side of the messaging channel.

use thiserror::Error;

use crate::message::ErrorKind;

/// A failed `checkTitle` round trip, as reported back to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CheckError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The background service went away before answering.
    pub fn channel_closed() -> Self {
        Self::new(ErrorKind::Channel, "Background service unavailable")
    }

    /// Whether the remote service rejected the credential.
    ///
    /// Older peers only send the message, so when the kind is unknown a
    /// `401` status in the text counts as well.
    pub fn is_auth(&self) -> bool {
        match self.kind {
            ErrorKind::Auth => true,
            ErrorKind::Unknown => self.message.contains("401"),
            _ => false,
        }
    }
}
