//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of the store. It owns the
//! record map and the receiving end of the request channel, and processes requests
//! one at a time so every operation observes the effects of the previous one.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The actor that owns a keyed collection of records.
///
/// # Architecture Note
/// Even with many concurrent callers, the actor handles its requests *sequentially*
/// in a loop, so the `store` needs no `Mutex` or `RwLock`. Exclusive ownership of the
/// map inside the task is what keeps it consistent.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever records are read or written.
///
/// # Operations
///
/// * **ExistsById**: reports whether the map holds the identifier.
/// * **FindById**: returns a clone of the record, or `None`.
/// * **Save**:
///     1. Uses the entity's own identifier, or draws one from the generator and
///        assigns it when the entity has none.
///     2. Inserts the record, replacing every field of any previous record at that key.
///     3. Returns the stored record.
/// * **DeleteById**: removes the record, or fails with `StoreError::NotFound`.
/// * **Count**: returns the number of records held.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When the channel is full,
    ///   client calls wait until there is space.
    /// * `next_id` - Generator used for entities saved without an identifier.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "CarEntity" rather than "car_service::model::car::CarEntity"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::ExistsById { id, respond_to } => {
                    let exists = self.store.contains_key(&id);
                    debug!(entity_type, %id, exists, "ExistsById");
                    let _ = respond_to.send(Ok(exists));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Save {
                    mut entity,
                    respond_to,
                } => {
                    debug!(entity_type, ?entity, "Save");
                    let id = match entity.id() {
                        Some(id) => id.clone(),
                        None => {
                            let id = (self.next_id)();
                            entity.assign_id(id.clone());
                            id
                        }
                    };
                    let replaced = self.store.insert(id.clone(), entity.clone()).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(entity));
                }
                StoreRequest::DeleteById { id, respond_to } => {
                    debug!(entity_type, %id, "DeleteById");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Count { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Count");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: Option<u32>,
        label: String,
    }

    impl StoredEntity for Gadget {
        type Id = u32;

        fn id(&self) -> Option<&u32> {
            self.id.as_ref()
        }

        fn assign_id(&mut self, id: u32) {
            self.id = Some(id);
        }
    }

    fn gadget(id: Option<u32>, label: &str) -> Gadget {
        Gadget {
            id,
            label: label.to_string(),
        }
    }

    fn spawn_store() -> StoreClient<Gadget> {
        let counter = AtomicU32::new(100);
        let (actor, client) =
            StoreActor::<Gadget>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn save_assigns_generated_id_when_absent() {
        let client = spawn_store();

        let first = client.save(gadget(None, "lamp")).await.unwrap();
        let second = client.save(gadget(None, "desk")).await.unwrap();

        assert_eq!(first.id, Some(100));
        assert_eq!(second.id, Some(101));
        assert_eq!(client.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn save_keeps_caller_supplied_id() {
        let client = spawn_store();

        let saved = client.save(gadget(Some(7), "chair")).await.unwrap();

        assert_eq!(saved.id, Some(7));
        assert_eq!(
            client.find_by_id(7).await.unwrap(),
            Some(gadget(Some(7), "chair"))
        );
    }

    #[tokio::test]
    async fn save_replaces_the_whole_record() {
        let client = spawn_store();
        client.save(gadget(Some(7), "chair")).await.unwrap();

        client.save(gadget(Some(7), "stool")).await.unwrap();

        assert_eq!(client.count().await.unwrap(), 1);
        assert_eq!(client.find_by_id(7).await.unwrap().unwrap().label, "stool");
    }

    #[tokio::test]
    async fn delete_missing_record_is_not_found() {
        let client = spawn_store();

        let result = client.delete_by_id(42).await;

        assert_eq!(result, Err(StoreError::NotFound("42".to_string())));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let client = spawn_store();
        let saved = client.save(gadget(None, "lamp")).await.unwrap();
        let id = saved.id.unwrap();

        client.delete_by_id(id).await.unwrap();

        assert!(!client.exists_by_id(id).await.unwrap());
        assert_eq!(client.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn actor_stops_when_clients_are_dropped() {
        let (actor, client) = StoreActor::<Gadget>::new(10, || 1);
        let handle = tokio::spawn(actor.run());

        client.save(gadget(None, "lamp")).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
