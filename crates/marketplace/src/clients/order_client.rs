//! # Order Client
//!
//! High-level API for the Order actor: creation, the supplier listing and
//! the confirmation step.

use crate::model::{Order, OrderCreate, OrderFilter, OrderId, UserId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use store_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }
}

fn map_store_error(e: StoreError) -> OrderError {
    match e {
        StoreError::NotFound(id) => OrderError::NotFound(id),
        StoreError::Entity(inner) => match inner.downcast::<OrderError>() {
            Ok(domain) => *domain,
            Err(other) => OrderError::Store(other.to_string()),
        },
        other => OrderError::Store(other.to_string()),
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        map_store_error(e)
    }
}

impl OrderClient {
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_store_error)
    }

    /// Insert several orders as one all-or-nothing write. If any payload is
    /// invalid no order is created.
    #[instrument(skip(self, params))]
    pub async fn create_batch(&self, params: Vec<OrderCreate>) -> Result<Vec<OrderId>, OrderError> {
        debug!(count = params.len(), "Sending request");
        self.inner
            .create_batch(params)
            .await
            .map_err(map_store_error)
    }

    /// Confirm a pending order, deducting stock exactly once.
    ///
    /// Returns the product stock remaining after the deduction. A second
    /// confirmation of the same order fails with
    /// [`OrderError::AlreadyConfirmed`] and leaves stock untouched.
    #[instrument(skip(self))]
    pub async fn confirm(&self, id: OrderId) -> Result<u32, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Confirm).await {
            Ok(OrderActionResult::Confirm(remaining)) => Ok(remaining),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Orders addressed to one supplier, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_supplier(&self, supplier_id: UserId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self
            .inner
            .find(OrderFilter::ForSupplier(supplier_id))
            .await
            .map_err(map_store_error)?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// A buyer's purchase history, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_buyer(&self, buyer_id: UserId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self
            .inner
            .find(OrderFilter::ForBuyer(buyer_id))
            .await
            .map_err(map_store_error)?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
