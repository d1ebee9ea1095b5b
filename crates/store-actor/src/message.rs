//! # Store Requests
//!
//! The message vocabulary between a [`StoreClient`](crate::StoreClient) and
//! its [`StoreActor`](crate::StoreActor). Every variant carries a oneshot
//! reply channel; the request types come from the entity's associated types,
//! so a cart payload cannot be sent to the order collection.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::{oneshot, watch};

/// Oneshot reply channel used by the actor to answer a request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A single operation against one document collection.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    /// Insert one document with a store-generated id.
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    /// Insert several documents atomically: every payload is validated and
    /// built before anything is inserted, so either all documents land or
    /// none do. Creation hooks do not run for batch writes; the batch is
    /// for plain record inserts.
    CreateBatch {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    /// Fetch a document by id.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Return every document matching the filter. The result order is
    /// unspecified; callers sort for display.
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    /// Apply an update payload through `on_update`.
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    /// Remove a document after running `on_delete`.
    Delete { id: T::Id, respond_to: Response<()> },
    /// Run a domain action against one document, atomically with respect to
    /// every other operation on this collection.
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Subscribe to one document. The receiver starts at the current state
    /// and is fed the complete document (never a diff) after every
    /// successful mutation; rapid successive writes may coalesce so the
    /// receiver always observes the newest state.
    Watch {
        id: T::Id,
        respond_to: Response<watch::Receiver<Option<T>>>,
    },
}
