//! # Lifecycle
//!
//! Process-level wiring: configuration ([`AppConfig`]), the running store and its
//! layers ([`CarSystem`]) and log setup ([`init_tracing`]).
//!
//! Shutdown follows the channel-closure rule of the store: once every client clone is
//! dropped, the store drains, logs its final size and exits. `main` therefore stops the
//! HTTP server (which owns the router state) before calling [`CarSystem::shutdown`].

pub mod car_system;
pub mod config;
pub mod tracing;

pub use car_system::*;
pub use config::*;
pub use self::tracing::*;
