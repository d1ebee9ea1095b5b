use thiserror::Error;

/// Errors surfaced by user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for UserError {
    fn from(message: String) -> Self {
        UserError::Store(message)
    }
}
