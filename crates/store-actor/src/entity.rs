//! # StoreEntity Trait
//!
//! The contract a document type must satisfy to be managed by a
//! [`StoreActor`](crate::StoreActor). Associated types pin down the create
//! and update payloads, the action enum, the query filter, the injected
//! context, and the error type, so a client for one collection can never be
//! fed another collection's payloads.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by every document type stored in a [`StoreActor`].
///
/// # Hooks
///
/// `on_create`, `on_delete`, and `on_missing` have default implementations;
/// override them only when the entity needs the behavior. All hooks receive
/// the actor's injected [`Context`](Self::Context), which is how an entity
/// reaches other actors (e.g. an order confirming against the inventory
/// actor).
///
/// [`StoreActor`]: crate::StoreActor
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Unique document identifier. `From<u32>` feeds store-side id
    /// generation; caller-keyed collections simply never use generated ids.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new document.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing document.
    type Update: Send + Sync + Debug;

    /// Domain operation executed atomically inside the actor loop.
    type Action: Send + Sync + Debug;

    /// Result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Equality filter evaluated by `find` against every stored document.
    /// Use `()` for collections that are never queried.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected via [`StoreActor::run`](crate::StoreActor::run).
    /// Use `()` when the entity needs none.
    type Context: Send + Sync;

    /// Error type for this entity. One enum per collection; it crosses the
    /// actor boundary boxed inside
    /// [`StoreError::Entity`](crate::StoreError::Entity) and can be
    /// downcast back on the client side.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the document from its id and create payload. Runs inside the
    /// actor before anything is inserted, so a validation failure here
    /// leaves the store untouched.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this document satisfies the given filter. The default admits
    /// everything, which is the right behavior for `Filter = ()`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Called when an action addresses an id with no stored document.
    /// Caller-keyed collections can return a default document to
    /// materialize on demand; the default reports not-found instead.
    fn on_missing(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Called after the document is built, before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request arrives; the entity applies the
    /// payload to its own state.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a domain action. The actor holds exclusive access to the
    /// document for the whole call, so a read-modify-write here cannot race
    /// another writer on the same collection.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
