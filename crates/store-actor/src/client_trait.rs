//! # EntityClient Trait
//!
//! Shared interface for collection-specific client wrappers. Provides
//! default `get` and `delete` built on the generic [`StoreClient`], plus the
//! error mapping hook each wrapper implements once.

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard reads.
///
/// A wrapper implements [`inner`](EntityClient::inner) and
/// [`map_error`](EntityClient::map_error) and gets `get`/`delete` for free;
/// domain operations (actions, queries) stay on the wrapper's own impl
/// block.
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map transport errors to the collection's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
