//! # Order Actor
//!
//! Holds every order document and owns the supplier confirmation step. This
//! is the one actor with a dependency: its context is a
//! [`ProductClient`](crate::clients::ProductClient), injected at `run` time,
//! so confirming an order can deduct catalog stock.
//!
//! Confirmation is the critical section of the whole system. Because the
//! actor handles one request at a time, the status check, the stock
//! deduction and the status flip inside [`OrderAction::Confirm`] form a
//! serializable read-modify-write: a duplicate confirmation arriving a
//! moment later finds the order already confirmed and fails without
//! touching stock again.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use store_actor::StoreActor;

/// Creates a new Order actor and its client.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, OrderClient::new(generic_client))
}
