//! # Checkout Pipeline
//!
//! Turns a cart into orders. One order is created per cart line, all of
//! them in a single atomic batch, then the cart is cleared. The clear is
//! best effort: once the orders exist the checkout has succeeded, and a
//! failed clear only leaves stale lines for the user to see.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, OrderClient, UserClient};
use crate::model::{OrderCreate, OrderId, UserId};
use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use store_actor::EntityClient;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Why a checkout was rejected. No order exists in any of these cases.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Unknown buyer: {0}")]
    UnknownBuyer(UserId),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for CheckoutError {
    fn from(message: String) -> Self {
        CheckoutError::Store(message)
    }
}

/// Orchestrates the cart-to-order flow across three actors.
#[derive(Clone)]
pub struct CheckoutPipeline {
    users: UserClient,
    carts: CartClient,
    orders: OrderClient,
}

impl CheckoutPipeline {
    pub fn new(users: UserClient, carts: CartClient, orders: OrderClient) -> Self {
        Self {
            users,
            carts,
            orders,
        }
    }

    /// Converts the buyer's cart into pending orders.
    ///
    /// Either every line becomes an order or none does. Returns the ids of
    /// the created orders.
    #[instrument(skip(self))]
    pub async fn checkout(&self, buyer_id: UserId) -> Result<Vec<OrderId>, CheckoutError> {
        let cart = self
            .carts
            .snapshot(buyer_id)
            .await
            .map_err(|e: CartError| CheckoutError::Store(e.to_string()))?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let buyer = self
            .users
            .get(buyer_id)
            .await
            .map_err(|e: UserError| CheckoutError::Store(e.to_string()))?
            .ok_or(CheckoutError::UnknownBuyer(buyer_id))?;
        let buyer_name = buyer.display_name().to_string();

        let params: Vec<OrderCreate> = cart
            .lines
            .iter()
            .map(|line| OrderCreate {
                buyer_id,
                buyer_name: buyer_name.clone(),
                product_id: line.product_id,
                product_name: line.name.clone(),
                supplier_id: line.supplier_id,
                supplier_name: line.supplier_name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        let order_ids = self.orders.create_batch(params).await?;
        info!(%buyer_id, count = order_ids.len(), "Checkout complete");

        // The orders exist; a failed clear must not undo the checkout.
        if let Err(e) = self.carts.clear(buyer_id).await {
            warn!(%buyer_id, error = %e, "Failed to clear cart after checkout");
        }

        Ok(order_ids)
    }
}
