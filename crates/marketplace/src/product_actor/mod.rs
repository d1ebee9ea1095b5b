//! # Product Actor
//!
//! Holds the catalog and its stock counts. Stock changes go through
//! [`ProductAction`]: because the actor processes one request at a time, a
//! `Deduct` is an atomic read-modify-write and two concurrent deductions can
//! never observe the same starting stock.
//!
//! ```rust
//! use marketplace::product_actor;
//! use marketplace::model::{ProductCreate, UserId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             supplier_id: UserId(1),
//!             supplier_name: "Distribuidora Sur".to_string(),
//!             name: "Harina 1kg".to_string(),
//!             unit_price: 1200,
//!             stock: 40,
//!         })
//!         .await?;
//!
//!     let remaining = client.deduct_stock(id, 5).await?;
//!     assert_eq!(remaining, 35);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use store_actor::StoreActor;

/// Creates a new Product actor and its client.
pub fn new() -> (StoreActor<Product>, ProductClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, ProductClient::new(generic_client))
}
