//! # Car Service
//!
//! Create, update and delete orchestration for cars.
//!
//! Every write to a known id runs inside a transaction scope: a lock on that id held
//! from the existence check through the write. Within one process, a concurrent update
//! and delete of the same car therefore cannot interleave between check and write, while
//! writes to other cars are not held up. A create without an id takes no lock, since the
//! store hands out a fresh one.
//!
//! | Operation | Store requests | Fails with |
//! |-----------|----------------|------------|
//! | `create`  | `save` | `Persistence` |
//! | `update`  | `exists_by_id`, then `save` | `Validation` (no id), `NotFound`, `Persistence` |
//! | `delete`  | `exists_by_id`, then `delete_by_id` | `NotFound`, `Persistence` |

mod locks;
pub mod mapping;

pub use mapping::{to_entity, to_resource};

use self::locks::CarLocks;
use crate::car_store::CarError;
use crate::model::{CarResource, ValidationErrors};
use crate::repository::CarRepository;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Orchestrates car writes against a [`CarRepository`].
#[derive(Clone)]
pub struct CarService {
    repository: Arc<dyn CarRepository>,
    locks: CarLocks,
}

impl CarService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self {
            repository,
            locks: CarLocks::default(),
        }
    }

    /// Stores a new car and returns it as persisted. A caller-supplied id is kept;
    /// otherwise the store assigns one.
    #[instrument(skip(self))]
    pub async fn create(&self, resource: CarResource) -> Result<CarResource, CarError> {
        let _tx = match resource.id {
            Some(id) => Some(self.locks.lock(id).await),
            None => None,
        };
        self.save(resource).await
    }

    /// Replaces every field of an existing car.
    #[instrument(skip(self))]
    pub async fn update(&self, resource: CarResource) -> Result<(), CarError> {
        let id = resource.id.ok_or_else(|| {
            ValidationErrors::single("id", "must be present to update a car")
        })?;

        let _tx = self.locks.lock(id).await;
        self.ensure_exists(id).await?;
        self.save(resource).await?;
        Ok(())
    }

    /// Removes an existing car.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), CarError> {
        let _tx = self.locks.lock(id).await;
        self.ensure_exists(id).await?;
        self.repository.delete_by_id(id).await?;
        debug!(%id, "Deleted car");
        Ok(())
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), CarError> {
        if !self.repository.exists_by_id(id).await? {
            warn!(%id, "Car not found");
            return Err(CarError::NotFound(id));
        }
        Ok(())
    }

    async fn save(&self, resource: CarResource) -> Result<CarResource, CarError> {
        let saved = self.repository.save(to_entity(resource)).await?;
        debug!(id = ?saved.id, "Saving car");
        Ok(to_resource(saved))
    }
}
