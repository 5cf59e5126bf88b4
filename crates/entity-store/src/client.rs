//! # Store Client
//!
//! This module defines the client half of the store.

use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The client forwards each call over a Tokio mpsc channel and waits for the answer on
/// a oneshot channel. It holds only a sender, so cloning is cheap and clones can be
/// shared across tasks.
pub struct StoreClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoredEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn exists_by_id(&self, id: T::Id) -> Result<bool, StoreError> {
        self.request(|respond_to| StoreRequest::ExistsById { id, respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    pub async fn save(&self, entity: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Save { entity, respond_to })
            .await
    }

    pub async fn delete_by_id(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::DeleteById { id, respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.request(|respond_to| StoreRequest::Count { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
