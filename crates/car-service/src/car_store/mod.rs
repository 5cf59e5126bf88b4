//! # Car Store
//!
//! Factory for the store that keeps [`CarEntity`] records, plus the [`CarError`] type
//! shared by the repository, service and HTTP layers.
//!
//! ## Usage
//!
//! ```rust
//! use car_service::car_store;
//! use car_service::model::CarEntity;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = car_store::new(car_store::DEFAULT_BUFFER_SIZE);
//!     tokio::spawn(actor.run());
//!
//!     let saved = client
//!         .save(CarEntity {
//!             id: None,
//!             assembler: "Toyota".into(),
//!             model: "Corolla".into(),
//!             manufacturing_year: 2020,
//!             model_year: 2021,
//!         })
//!         .await
//!         .unwrap();
//!     assert!(saved.id.is_some());
//! }
//! ```

pub mod error;

pub use error::*;

use crate::model::CarEntity;
use entity_store::{StoreActor, StoreClient};
use uuid::Uuid;

/// Channel capacity used when no configuration overrides it.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Creates a new car store and its client. Cars saved without an id get a random UUID.
pub fn new(buffer_size: usize) -> (StoreActor<CarEntity>, StoreClient<CarEntity>) {
    StoreActor::new(buffer_size, Uuid::new_v4)
}
