use crate::model::OrderId;
use thiserror::Error;

/// Errors surfaced by order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Order already confirmed: {0}")]
    AlreadyConfirmed(OrderId),

    #[error("Product no longer exists: {0}")]
    ProductMissing(String),

    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for OrderError {
    fn from(message: String) -> Self {
        OrderError::Store(message)
    }
}
