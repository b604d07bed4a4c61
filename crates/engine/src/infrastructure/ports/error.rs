//! Error types for port operations.

/// Failure of a call to the external media service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaError {
    /// The service answered with a non-success status and, usually, a message.
    #[error("Media service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Media service request failed: {0}")]
    RequestFailed(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A request could not be built from the given input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl MediaError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The message the service itself returned, if it returned one.
    pub fn external_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
