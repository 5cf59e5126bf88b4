//! # Entity Store
//!
//! An actor-owned, keyed record store. A single Tokio task owns the record map and
//! processes every request sequentially, so callers never share mutable state and
//! never take a lock to read or write a record.
//!
//! The store offers the small contract a repository layer needs:
//!
//! - `exists_by_id` - read-only existence check
//! - `find_by_id` - fetch a copy of a record
//! - `save` - upsert the full record, assigning an identifier when the entity has none
//! - `delete_by_id` - remove a record, failing with [`StoreError::NotFound`] when absent
//! - `count` - number of stored records
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoredEntity`]) - how the store reads and assigns identifiers
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and identifier generation
//! 3. **Interface Layer** ([`StoreClient`]) - type-safe async request/response calls
//!
//! ## Example
//!
//! ```rust
//! use entity_store::{StoreActor, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note {
//!     id: Option<u32>,
//!     text: String,
//! }
//!
//! impl StoredEntity for Note {
//!     type Id = u32;
//!
//!     fn id(&self) -> Option<&u32> {
//!         self.id.as_ref()
//!     }
//!
//!     fn assign_id(&mut self, id: u32) {
//!         self.id = Some(id);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = std::sync::atomic::AtomicU32::new(1);
//!     let (actor, client) = StoreActor::<Note>::new(10, move || {
//!         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let saved = client
//!         .save(Note { id: None, text: "hello".into() })
//!         .await
//!         .unwrap();
//!     assert_eq!(saved.id, Some(1));
//!     assert!(client.exists_by_id(1).await.unwrap());
//!
//!     client.delete_by_id(1).await.unwrap();
//!     assert!(!client.exists_by_id(1).await.unwrap());
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially** in arrival order
//! - Clients are cheap to clone; the actor stops once every client is dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockStore`](mock::MockStore), a client backed by a queue
//! of expectations, and raw channel helpers for asserting the exact request sequence a
//! caller issues.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
