//! # Store Errors
//!
//! Transport-level errors shared by every actor and client. Entity-specific
//! failures travel boxed inside [`StoreError::Entity`] and are downcast back
//! to their concrete type by the domain clients.

/// Errors produced by the store machinery itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The actor's request channel is closed (actor shut down).
    #[error("store actor closed")]
    Closed,

    /// The actor dropped the reply channel without answering.
    #[error("store actor dropped the reply channel")]
    NoReply,

    /// No document with the given id.
    #[error("document not found: {0}")]
    NotFound(String),

    /// A typed error raised by the entity's own hooks.
    #[error("entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
