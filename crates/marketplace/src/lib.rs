//! # Marketplace
//!
//! A cart-to-order pipeline for a small supplier marketplace, built on the
//! [`store_actor`] framework. Four actors own the four collections:
//!
//! - **Users**: accounts for buyers and suppliers
//! - **Products**: the catalog, including stock counts
//! - **Carts**: one per user, materialized on first use
//! - **Orders**: one document per purchased line, pending until the
//!   supplier confirms
//!
//! The flow through the system:
//!
//! 1. A buyer adds products to their cart; every edit republishes the full
//!    cart and the [`CartProjection`](projection::CartProjection) rebuilds
//!    its totals from scratch.
//! 2. [`CheckoutPipeline`](clients::CheckoutPipeline) turns the cart into
//!    one pending order per line in a single atomic batch, then clears the
//!    cart best effort.
//! 3. The supplier confirms each order. Confirmation deducts the ordered
//!    quantity from stock exactly once, clamping at zero; a duplicate
//!    confirmation fails with
//!    [`OrderError::AlreadyConfirmed`](order_actor::OrderError::AlreadyConfirmed).
//!
//! ```rust
//! use marketplace::lifecycle::Marketplace;
//! use marketplace::model::{LineSnapshot, ProductCreate, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = Marketplace::new();
//!
//!     let supplier = system
//!         .users
//!         .create_user(UserCreate {
//!             name: "Distribuidora Sur".to_string(),
//!             email: "ventas@sur.cl".to_string(),
//!         })
//!         .await?;
//!     let buyer = system
//!         .users
//!         .create_user(UserCreate {
//!             name: "Almacén Central".to_string(),
//!             email: "compras@central.cl".to_string(),
//!         })
//!         .await?;
//!
//!     let product = system
//!         .products
//!         .create_product(ProductCreate {
//!             supplier_id: supplier,
//!             supplier_name: "Distribuidora Sur".to_string(),
//!             name: "Harina 1kg".to_string(),
//!             unit_price: 1200,
//!             stock: 40,
//!         })
//!         .await?;
//!
//!     system
//!         .carts
//!         .add_line(
//!             buyer,
//!             LineSnapshot {
//!                 product_id: product,
//!                 supplier_id: supplier,
//!                 name: "Harina 1kg".to_string(),
//!                 supplier_name: "Distribuidora Sur".to_string(),
//!                 unit_price: 1200,
//!             },
//!         )
//!         .await?;
//!
//!     let order_ids = system.checkout.checkout(buyer).await?;
//!     let remaining = system.orders.confirm(order_ids[0]).await?;
//!     assert_eq!(remaining, 39);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod cart_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod projection;
pub mod user_actor;
