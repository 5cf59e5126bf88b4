//! # Store Messages
//!
//! This module defines the request type sent from a `StoreClient` to its `StoreActor`.

use crate::entity::StoredEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the actor to operate on its record map.
///
/// # Repository Pattern
/// The variants map onto the operations a conventional repository exposes:
///
/// - **ExistsById**: read-only existence check.
/// - **FindById**: fetch a copy of the stored record.
/// - **Save**: upsert. Replaces every field of the record at that identifier, or inserts it.
/// - **DeleteById**: remove the record. Fails with `NotFound` when absent.
/// - **Count**: number of records currently held.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    ExistsById {
        id: T::Id,
        respond_to: Response<bool>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    DeleteById {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
