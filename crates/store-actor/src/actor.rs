//! # Store Actor Loop
//!
//! `StoreActor<T>` owns the in-memory collection for a document type and
//! processes [`StoreRequest`]s sequentially. One task, one collection,
//! exclusive state: no locks, and every request observes the effects of all
//! requests before it.
//!
//! The actor also owns the watch channels for subscribed documents and
//! republishes the full document after every successful mutation.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The server half of a document collection.
///
/// Create one with [`StoreActor::new`], then spawn [`StoreActor::run`] with
/// the entity's context. The paired [`StoreClient`] is cheap to clone and is
/// the only way to reach the collection.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    watchers: HashMap<T::Id, watch::Sender<Option<T>>>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            watchers: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// `context` is injected into every entity hook, allowing documents to
    /// reach other actors (late binding: dependencies arrive at run time,
    /// not construction time).
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.generate_id();
                    match T::from_create(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.publish(&id);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::CreateBatch { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "CreateBatch");
                    // Build and validate every document before touching the
                    // store, so a failure inserts nothing.
                    let mut staged = Vec::with_capacity(params.len());
                    let mut failure = None;
                    for p in params {
                        let id = self.generate_id();
                        match T::from_create(id.clone(), p) {
                            Ok(item) => staged.push((id, item)),
                            Err(e) => {
                                failure = Some(e);
                                break;
                            }
                        }
                    }
                    match failure {
                        Some(e) => {
                            warn!(entity_type, error = %e, "Batch rejected");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                        None => {
                            let ids: Vec<T::Id> =
                                staged.iter().map(|(id, _)| id.clone()).collect();
                            for (id, item) in staged {
                                self.store.insert(id.clone(), item);
                                self.publish(&id);
                            }
                            info!(
                                entity_type,
                                count = ids.len(),
                                size = self.store.len(),
                                "Batch created"
                            );
                            let _ = respond_to.send(Ok(ids));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, hits = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        let snapshot = item.clone();
                        self.publish(&id);
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(snapshot));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.publish(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if !self.store.contains_key(&id) {
                        // Caller-keyed collections can materialize a default
                        // document instead of failing.
                        match T::on_missing(&id) {
                            Some(fresh) => {
                                debug!(entity_type, %id, "Materialized on demand");
                                self.store.insert(id.clone(), fresh);
                            }
                            None => {
                                warn!(entity_type, %id, "Not found");
                                let _ =
                                    respond_to.send(Err(StoreError::NotFound(id.to_string())));
                                continue;
                            }
                        }
                    }
                    let Some(item) = self.store.get_mut(&id) else {
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| StoreError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            self.publish(&id);
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Watch { id, respond_to } => {
                    debug!(entity_type, %id, "Watch");
                    let rx = match self.watchers.get(&id) {
                        Some(tx) if !tx.is_closed() => tx.subscribe(),
                        _ => {
                            let (tx, rx) = watch::channel(self.store.get(&id).cloned());
                            self.watchers.insert(id.clone(), tx);
                            rx
                        }
                    };
                    let _ = respond_to.send(Ok(rx));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn generate_id(&mut self) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        id
    }

    /// Pushes the full current document to its watchers, if any. Dead
    /// channels are pruned lazily.
    fn publish(&mut self, id: &T::Id) {
        if let Some(tx) = self.watchers.get(id) {
            if tx.is_closed() {
                self.watchers.remove(id);
            } else {
                tx.send_replace(self.store.get(id).cloned());
            }
        }
    }
}
