//! # Mock Clients
//!
//! `MockClient<T>` speaks the same channel protocol as a real
//! [`StoreActor`](crate::StoreActor) but answers from a queue of scripted
//! expectations instead of real state. Use it to test client-side logic
//! (wrappers, pipelines) without spawning actors.
//!
//! | Feature | MockClient | Real actor |
//! |---------|------------|------------|
//! | Speed | Instant, in-memory | Fast, but spawns a task |
//! | Determinism | Fully scripted | Subject to the scheduler |
//! | State | None (expectations) | Real collection state |
//! | Error injection | Trivial (`return_err`) | Needs specific state |
//!
//! ## Fluent API
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_actor::mock::MockClient;
//! use store_actor::StoreEntity;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Profile { id: u32, email: String }
//! #[derive(Debug)] struct ProfileCreate { email: String }
//! #[derive(Debug)] struct ProfileUpdate;
//! #[derive(Debug)] enum ProfileAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("profile error")]
//! struct ProfileError;
//!
//! #[async_trait]
//! impl StoreEntity for Profile {
//!     type Id = u32; type Create = ProfileCreate; type Update = ProfileUpdate;
//!     type Action = ProfileAction; type ActionResult = (); type Filter = ();
//!     type Context = (); type Error = ProfileError;
//!     fn from_create(id: u32, params: ProfileCreate) -> Result<Self, ProfileError> {
//!         Ok(Self { id, email: params.email })
//!     }
//!     async fn on_update(&mut self, _: ProfileUpdate, _: &()) -> Result<(), ProfileError> { Ok(()) }
//!     async fn handle_action(&mut self, a: ProfileAction, _: &()) -> Result<(), ProfileError> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Profile>::new();
//!     mock.expect_get(1).return_ok(Some(Profile { id: 1, email: "a@b.cl".into() }));
//!
//!     let client = mock.client();
//!     let profile = client.get(1).await.unwrap().unwrap();
//!     assert_eq!(profile.email, "a@b.cl");
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the request payloads themselves, use
//! [`create_mock_client`] and the `expect_*` helpers, which hand back the
//! raw request and its reply channel.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted request/response pair.
enum Expectation<T: StoreEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    CreateBatch {
        response: Result<Vec<T::Id>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
    Find {
        response: Result<Vec<T>, StoreError>,
    },
}

/// A mock client with expectation tracking.
///
/// Expectations are consumed in FIFO order; an unexpected request or a
/// mismatched expectation panics the mock task, which surfaces as a hung or
/// failed test.
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::CreateBatch {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::CreateBatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action {
                            id: _,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Find {
                            filter: _,
                            respond_to,
                        },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for the given id.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create_batch`.
    pub fn expect_create_batch(&mut self) -> BatchExpectationBuilder<T> {
        BatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` for the given id.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` for the given id.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an action against the given id.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find`.
    pub fn expect_find(&mut self) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every scripted expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `create_batch` expectations.
pub struct BatchExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> BatchExpectationBuilder<T> {
    pub fn return_ok(self, ids: Vec<T::Id>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::CreateBatch { response: Ok(ids) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::CreateBatch {
                response: Err(error),
            });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Ok(updated),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Ok(()),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> FindExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                response: Ok(items),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a bare mock client and the receiver for asserting requests.
///
/// Unlike [`MockClient`], this exposes the raw [`StoreRequest`]s so a test
/// can assert on the payloads before choosing a reply.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Receives the next message and unpacks it as a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next message and unpacks it as a Get request.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message and unpacks it as an Action request.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StoreEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Profile {
        id: u32,
        name: String,
        email: String,
    }

    #[derive(Debug)]
    struct ProfileCreate {
        name: String,
        email: String,
    }

    #[derive(Debug)]
    struct ProfileUpdate;

    #[derive(Debug)]
    enum ProfileAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("profile error")]
    struct ProfileError;

    #[async_trait]
    impl StoreEntity for Profile {
        type Id = u32;
        type Create = ProfileCreate;
        type Update = ProfileUpdate;
        type Action = ProfileAction;
        type ActionResult = ();
        type Filter = ();
        type Context = ();
        type Error = ProfileError;

        fn from_create(id: u32, params: ProfileCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                email: params.email,
            })
        }

        async fn on_update(
            &mut self,
            _update: ProfileUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: ProfileAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            match action {}
        }
    }

    #[tokio::test]
    async fn raw_mock_exposes_request_payloads() {
        let (client, mut receiver) = create_mock_client::<Profile>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ProfileCreate {
                    name: "Test".to_string(),
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn fluent_mock_replays_expectations_in_order() {
        let mut mock = MockClient::<Profile>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Profile {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
        }));

        let client = mock.client();

        let id = client
            .create(ProfileCreate {
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        mock.verify();
    }

    #[tokio::test]
    async fn fluent_mock_scripts_updates_and_deletes() {
        let mut mock = MockClient::<Profile>::new();

        mock.expect_update(1).return_ok(Profile {
            id: 1,
            name: "Renamed".to_string(),
            email: "test@example.com".to_string(),
        });
        mock.expect_delete(1).return_ok();
        mock.expect_delete(2)
            .return_err(StoreError::NotFound("2".to_string()));

        let client = mock.client();

        let updated = client.update(1, ProfileUpdate).await.unwrap();
        assert_eq!(updated.name, "Renamed");

        client.delete(1).await.unwrap();
        let err = client.delete(2).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        mock.verify();
    }
}
