//! # Store Actor
//!
//! An actor-shaped document store for Tokio applications. Each collection of
//! documents is owned by a single [`StoreActor`] task; callers talk to it
//! through a cloneable [`StoreClient`] over an mpsc channel and receive
//! replies on oneshot channels.
//!
//! ## Why an actor?
//!
//! The actor processes one request at a time, so every operation it exposes
//! is serializable with respect to every other operation on the same
//! collection. A read-modify-write expressed as a single [`StoreEntity`]
//! action can never lose an update to a concurrent writer, without any
//! locking in user code.
//!
//! ## Operations
//!
//! The store offers the surface of a small remote document store:
//!
//! - `create` / `create_batch`: insert with store-generated ids; the batch
//!   form is all-or-nothing (every document is validated before any insert)
//! - `get`: fetch a document by id
//! - `find`: query by an entity-defined equality [`StoreEntity::Filter`]
//! - `update` / `delete`: mutate through the entity's lifecycle hooks
//! - `perform_action`: run a domain operation atomically inside the actor
//! - `watch`: subscribe to a single document; every change delivers the
//!   complete current document (never a diff) on a `watch` channel
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_actor::{StoreActor, StoreEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     body: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteCreate {
//!     body: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteUpdate {
//!     body: Option<String>,
//! }
//!
//! #[derive(Debug)]
//! enum NoteAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! #[async_trait]
//! impl StoreEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Filter = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, body: params.body })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), NoteError> {
//!         if let Some(body) = update.body {
//!             self.body = body;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<(), NoteError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Note>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(NoteCreate { body: "hello".into() }).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.body, "hello");
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies (typically clients of other store actors) are passed to
//! [`StoreActor::run`], not to the constructor. Entities receive them in
//! every hook via [`StoreEntity::Context`]. Late binding keeps actor wiring
//! acyclic: create all actors first, then start each with the clients it
//! needs.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) with an
//! expectation API for testing client-side logic without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
