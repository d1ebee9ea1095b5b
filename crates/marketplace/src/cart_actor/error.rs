use crate::model::ProductId;
use thiserror::Error;

/// Errors surfaced by cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Product not in cart: {0}")]
    LineNotFound(ProductId),

    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for CartError {
    fn from(message: String) -> Self {
        CartError::Store(message)
    }
}
