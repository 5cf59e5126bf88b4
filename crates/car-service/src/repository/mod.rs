//! # Car Repository
//!
//! The persistence gateway the service layer depends on. [`CarRepository`] is the
//! contract; [`StoreCarRepository`] implements it on top of an entity-store client.

use crate::car_store::CarError;
use crate::model::CarEntity;
use async_trait::async_trait;
use entity_store::{StoreClient, StoreError};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Persistence operations needed to create, replace and delete cars.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Read-only existence check.
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, CarError>;

    /// Upsert: replaces every field of the car at `entity.id`, or inserts it.
    /// A car without an id gets a generated one.
    async fn save(&self, entity: CarEntity) -> Result<CarEntity, CarError>;

    /// Removes the car, failing with `CarError::NotFound` when absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), CarError>;

    /// Copy of the stored car, or `None` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CarEntity>, CarError>;

    /// Number of cars currently stored.
    async fn count(&self) -> Result<usize, CarError>;
}

/// [`CarRepository`] backed by a car store actor.
#[derive(Clone)]
pub struct StoreCarRepository {
    inner: StoreClient<CarEntity>,
}

impl StoreCarRepository {
    pub fn new(inner: StoreClient<CarEntity>) -> Self {
        Self { inner }
    }

    fn map_error(e: StoreError) -> CarError {
        CarError::Persistence(e.to_string())
    }
}

#[async_trait]
impl CarRepository for StoreCarRepository {
    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, CarError> {
        debug!("Sending request");
        self.inner.exists_by_id(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn save(&self, entity: CarEntity) -> Result<CarEntity, CarError> {
        debug!("Sending request");
        self.inner.save(entity).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> Result<(), CarError> {
        debug!("Sending request");
        match self.inner.delete_by_id(id).await {
            Err(StoreError::NotFound(_)) => Err(CarError::NotFound(id)),
            other => other.map_err(Self::map_error),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CarEntity>, CarError> {
        debug!("Sending request");
        self.inner.find_by_id(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<usize, CarError> {
        debug!("Sending request");
        self.inner.count().await.map_err(Self::map_error)
    }
}
