//! # Cart Client
//!
//! High-level API for the Cart actor. Reads come back as [`CartView`]s
//! rebuilt from the full cart; live screens use [`CartClient::watch`] to get
//! a [`CartProjection`] that rebuilds on every change.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartView, LineSnapshot, ProductId, UserId};
use crate::projection::CartProjection;
use async_trait::async_trait;
use store_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }
}

fn map_store_error(e: StoreError) -> CartError {
    match e {
        StoreError::Entity(inner) => match inner.downcast::<CartError>() {
            Ok(domain) => *domain,
            Err(other) => CartError::Store(other.to_string()),
        },
        other => CartError::Store(other.to_string()),
    }
}

#[async_trait]
impl EntityClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: StoreError) -> CartError {
        map_store_error(e)
    }
}

impl CartClient {
    /// Add one unit of a product to the user's cart.
    ///
    /// Returns the line's quantity after the add.
    #[instrument(skip(self, line))]
    pub async fn add_line(&self, user_id: UserId, line: LineSnapshot) -> Result<u32, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::Add(line))
            .await
        {
            Ok(CartActionResult::Add(quantity)) => Ok(quantity),
            Ok(_) => unreachable!("Add action must return Add result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Set an existing line to an exact quantity (at least 1).
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                user_id,
                CartAction::SetQuantity {
                    product_id,
                    quantity,
                },
            )
            .await
        {
            Ok(CartActionResult::SetQuantity(())) => Ok(()),
            Ok(_) => unreachable!("SetQuantity action must return SetQuantity result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Drop a line from the cart. Succeeds even if the line is absent.
    #[instrument(skip(self))]
    pub async fn remove_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::Remove(product_id))
            .await
        {
            Ok(CartActionResult::Remove(())) => Ok(()),
            Ok(_) => unreachable!("Remove action must return Remove result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Empty the cart in one step.
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: UserId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(user_id, CartAction::Clear).await {
            Ok(CartActionResult::Clear(())) => Ok(()),
            Ok(_) => unreachable!("Clear action must return Clear result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// One-shot totals view of the user's cart. A user who never touched
    /// their cart gets the zero view.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, user_id: UserId) -> Result<CartView, CartError> {
        debug!("Sending request");
        let cart = self.inner.get(user_id).await.map_err(map_store_error)?;
        Ok(CartView::rebuild(cart.as_ref()))
    }

    /// Subscribe to the user's cart. The projection rebuilds its totals
    /// from the full cart on every change.
    #[instrument(skip(self))]
    pub async fn watch(&self, user_id: UserId) -> Result<CartProjection, CartError> {
        debug!("Sending request");
        let receiver = self.inner.watch(user_id).await.map_err(map_store_error)?;
        Ok(CartProjection::new(receiver))
    }
}
