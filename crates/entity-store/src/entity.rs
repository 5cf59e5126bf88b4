//! # StoredEntity Trait
//!
//! The `StoredEntity` trait is the contract every record type must satisfy to be kept by
//! a [`StoreActor`](crate::StoreActor). The store only needs two things from a record:
//! a way to read its identifier and a way to stamp one on it when the caller left it empty.
//!
//! # Architecture Note
//! Identifiers are optional on the entity itself. A record saved without an identifier
//! gets one from the store's generator, mirroring a table with a generated primary key.
//! A record saved *with* an identifier keeps it as given.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `StoreActor`.
pub trait StoredEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., `Uuid`, `u64`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The identifier carried by this entity, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Stamp a store-generated identifier on an entity saved without one.
    fn assign_id(&mut self, id: Self::Id);
}
