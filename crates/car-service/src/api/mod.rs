//! # HTTP API
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | POST | `{base}/cars` | 201 + `Location: {base}/cars/{id}` | 400 |
//! | PUT | `{base}/cars/{id}` | 204 | 400, 404 |
//! | DELETE | `{base}/cars/{id}` | 204 | 400, 404 |
//! | GET | `/health` | 200 `{"status":"ok"}` | |
//!
//! Failures are `application/problem+json` bodies (see [`problem::ApiProblem`]); store
//! failures surface as 500.

pub mod handlers;
pub mod problem;
pub mod state;

pub use state::AppState;

use axum::{
    http::HeaderName,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use handlers::{create_car, delete_car, healthcheck, update_car};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let cars = Router::new()
        .route("/cars", post(create_car))
        .route("/cars/{id}", put(update_car).delete(delete_car));

    let cars = match state.base_path() {
        "" => cars,
        base_path => Router::new().nest(base_path, cars),
    };

    Router::new()
        .route("/health", get(healthcheck))
        .merge(cars)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
