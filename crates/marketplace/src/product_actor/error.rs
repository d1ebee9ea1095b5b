use thiserror::Error;

/// Errors surfaced by product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for ProductError {
    fn from(message: String) -> Self {
        ProductError::Store(message)
    }
}
