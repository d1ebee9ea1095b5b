//! # Product Client
//!
//! High-level API for the Product actor: catalog CRUD plus the stock
//! actions used by order confirmation.

use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use store_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

fn map_store_error(e: StoreError) -> ProductError {
    match e {
        StoreError::NotFound(id) => ProductError::NotFound(id),
        StoreError::Entity(inner) => match inner.downcast::<ProductError>() {
            Ok(domain) => *domain,
            Err(other) => ProductError::Store(other.to_string()),
        },
        other => ProductError::Store(other.to_string()),
    }
}

#[async_trait]
impl EntityClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProductError {
        map_store_error(e)
    }
}

impl ProductClient {
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_store_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(map_store_error)
    }

    /// Current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.inner.perform_action(id, ProductAction::CheckStock).await {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Atomically remove `quantity` units from stock, clamping at zero.
    ///
    /// Returns the stock remaining after the deduction.
    #[instrument(skip(self))]
    pub async fn deduct_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Deducting stock");
        match self
            .inner
            .perform_action(id, ProductAction::Deduct(quantity))
            .await
        {
            Ok(ProductActionResult::Deduct(remaining)) => Ok(remaining),
            Ok(_) => unreachable!("Deduct action must return Deduct result"),
            Err(e) => Err(map_store_error(e)),
        }
    }

    /// Every listing owned by a supplier, active or not.
    #[instrument(skip(self))]
    pub async fn list_for_supplier(
        &self,
        supplier_id: crate::model::UserId,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .find(ProductFilter::ForSupplier(supplier_id))
            .await
            .map_err(map_store_error)
    }

    /// The catalog as buyers see it.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .find(ProductFilter::Active)
            .await
            .map_err(map_store_error)
    }
}
