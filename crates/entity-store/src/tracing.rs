//! # Observability & Tracing
//!
//! Structured logging setup shared by binaries built on the store.
//!
//! The store logs with the `tracing` crate:
//!
//! - **Store lifecycle**: `Store started` and `Shutdown` (with the final size) at `info`
//! - **Requests**: every request at `debug`, with the record identifier as a field
//! - **Writes**: `Saved` / `Deleted` at `info`, `Not found` at `warn`
//!
//! ```bash
//! RUST_LOG=info cargo run                   # lifecycle and writes
//! RUST_LOG=entity_store=debug cargo run     # every request with payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` (e.g. `"info"` or
/// `"my_app=debug,entity_store=info"`) is used. The output is compact and omits module
/// paths, since records carry an `entity_type` field instead.
///
/// Calling this twice is harmless: the second call leaves the first subscriber in place.
pub fn setup_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
