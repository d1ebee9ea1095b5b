//! # System Lifecycle
//!
//! Wires the four actors into one running marketplace and coordinates their
//! shutdown.
//!
//! Actors are created without dependencies, then started with their
//! dependencies injected through `run(context)`. Only the order actor has a
//! dependency: it holds a [`ProductClient`] so confirmation can deduct
//! stock. The dependency graph is acyclic, so dropping the clients held by
//! [`Marketplace`] is enough to drain and stop every actor.

use crate::clients::{CartClient, CheckoutPipeline, OrderClient, ProductClient, UserClient};
use crate::{cart_actor, order_actor, product_actor, user_actor};
use tracing::{error, info};

/// The running marketplace: one client per collection plus the checkout
/// pipeline, with the actor task handles kept for shutdown.
pub struct Marketplace {
    pub users: UserClient,
    pub products: ProductClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub checkout: CheckoutPipeline,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Marketplace {
    /// Creates and starts every actor.
    pub fn new() -> Self {
        let (user_actor, users) = user_actor::new();
        let (product_actor, products) = product_actor::new();
        let (cart_actor, carts) = cart_actor::new();
        let (order_actor, orders) = order_actor::new();

        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));
        // The order actor reaches back into the catalog when confirming.
        let order_handle = tokio::spawn(order_actor.run(products.clone()));

        let checkout = CheckoutPipeline::new(users.clone(), carts.clone(), orders.clone());

        Self {
            users,
            products,
            carts,
            orders,
            checkout,
            handles: vec![user_handle, product_handle, cart_handle, order_handle],
        }
    }

    /// Gracefully shuts down the whole system.
    ///
    /// Dropping the clients closes the request channels; each actor drains
    /// its queue and exits. The order actor's context clone of the product
    /// client goes down with the order actor, so the product actor stops
    /// last.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace");

        drop(self.checkout);
        drop(self.users);
        drop(self.products);
        drop(self.carts);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Marketplace shutdown complete");
        Ok(())
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}
