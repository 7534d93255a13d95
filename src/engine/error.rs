use thiserror::Error;

/// Raised when an engine operation is called with an argument that violates
/// its contract. Nothing has been mutated when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument: {message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
