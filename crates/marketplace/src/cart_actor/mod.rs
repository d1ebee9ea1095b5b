//! # Cart Actor
//!
//! Holds one cart per user, keyed by [`UserId`](crate::model::UserId). Carts
//! are never created explicitly: the first action against a user's id
//! materializes an empty cart. All edits are [`CartAction`]s so each edit is
//! atomic with respect to every other cart operation.
//!
//! ```rust
//! use marketplace::cart_actor;
//! use marketplace::model::{LineSnapshot, ProductId, UserId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = cart_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let buyer = UserId(7);
//!     let line = LineSnapshot {
//!         product_id: ProductId(1),
//!         supplier_id: UserId(2),
//!         name: "Harina 1kg".to_string(),
//!         supplier_name: "Distribuidora Sur".to_string(),
//!         unit_price: 1200,
//!     };
//!     client.add_line(buyer, line.clone()).await?;
//!     client.add_line(buyer, line).await?;
//!
//!     let view = client.snapshot(buyer).await?;
//!     assert_eq!(view.item_count, 2);
//!     assert_eq!(view.subtotal, 2400);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use store_actor::StoreActor;

/// Creates a new Cart actor and its client.
pub fn new() -> (StoreActor<Cart>, CartClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, CartClient::new(generic_client))
}
