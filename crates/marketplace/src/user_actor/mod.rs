//! # User Actor
//!
//! Holds every account document. The simplest collection in the system: no
//! context dependencies, no custom actions, plain CRUD.
//!
//! ```rust
//! use marketplace::user_actor;
//! use marketplace::model::UserCreate;
//! use store_actor::EntityClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate {
//!             name: "Alicia".to_string(),
//!             email: "alicia@example.cl".to_string(),
//!         })
//!         .await?;
//!     let user = client.get(id).await?.unwrap();
//!     assert_eq!(user.display_name(), "Alicia");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use store_actor::StoreActor;

/// Creates a new User actor and its client.
pub fn new() -> (StoreActor<User>, UserClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, UserClient::new(generic_client))
}
