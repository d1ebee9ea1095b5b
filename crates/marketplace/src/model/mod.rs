//! Domain model: documents stored by the actors plus their id newtypes.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartCreate, CartLine, CartView, LineSnapshot, TAX_RATE_PERCENT};
pub use order::{Order, OrderCreate, OrderFilter, OrderStatus};
pub use product::{Product, ProductCreate, ProductFilter, ProductUpdate};
pub use user::{User, UserCreate, UserUpdate};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered user (buyer or supplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

/// Identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

/// Identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for UserId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<u32> for ProductId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<u32> for OrderId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}
