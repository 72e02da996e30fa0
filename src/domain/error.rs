use thiserror::Error;

/// Internal failure taxonomy using thiserror.
///
/// Never crosses the public API boundary: the service tags log lines with
/// the cause, then collapses the failure to `None` / `false`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl DomainError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}
