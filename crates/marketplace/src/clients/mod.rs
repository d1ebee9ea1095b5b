//! Domain-specific client wrappers around the generic store clients.
//!
//! Each wrapper translates transport errors into its collection's error
//! type and exposes the collection's operations as plain typed methods, so
//! call sites never see [`StoreRequest`](store_actor::StoreRequest)s or
//! action enums.

pub mod cart_client;
pub mod checkout;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use cart_client::CartClient;
pub use checkout::{CheckoutError, CheckoutPipeline};
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
