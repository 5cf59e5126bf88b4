//! # Car Service
//!
//! HTTP service that creates, replaces and deletes car records.
//!
//! ## Layers
//!
//! - **[api]**: axum router, handlers and problem+json errors.
//! - **[service]**: [`CarService`](service::CarService), the transactional create/update/delete orchestration.
//! - **[repository]**: the [`CarRepository`](repository::CarRepository) persistence contract and its store-backed implementation.
//! - **[car_store]**: the in-memory car store (an `entity_store` actor keyed by UUID) and [`CarError`](car_store::CarError).
//! - **[model]**: [`CarEntity`](model::CarEntity), [`CarResource`](model::CarResource) and field validation.
//! - **[lifecycle]**: configuration, startup and shutdown, tracing.
//!
//! ## Testing
//!
//! Service and repository logic is tested against [`entity_store::mock`]; HTTP behaviour
//! is tested by driving [`api::build_router`] with `tower::ServiceExt::oneshot`.

pub mod api;
pub mod car_store;
pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod service;
