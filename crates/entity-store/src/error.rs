//! # Store Errors
//!
//! Errors raised by the store runtime itself. Domain crates map these onto their own
//! error types at the repository boundary.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
}
