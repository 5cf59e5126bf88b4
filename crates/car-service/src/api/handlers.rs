use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    api::{
        problem::{ApiProblem, ApiResult},
        state::AppState,
    },
    model::{validate_car, CarResource},
};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[instrument(skip_all)]
pub async fn create_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CarResource>, JsonRejection>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1])> {
    let correlation_id = request_correlation_id(&headers);
    let Json(resource) =
        payload.map_err(|r| ApiProblem::from_json_rejection(r, correlation_id.clone()))?;
    validate_car(&resource).map_err(|e| ApiProblem::validation(e, correlation_id.clone()))?;

    let created = state
        .service
        .create(resource)
        .await
        .map_err(|e| ApiProblem::from_domain(e, correlation_id.clone()))?;
    let id = created
        .id
        .ok_or_else(|| ApiProblem::internal("stored car has no id", correlation_id))?;

    info!(%id, "Car created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, state.car_location(id))],
    ))
}

#[instrument(skip_all)]
pub async fn update_car(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    headers: HeaderMap,
    payload: Result<Json<CarResource>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = request_correlation_id(&headers);
    let Path(id) = path.map_err(|r| ApiProblem::from_path_rejection(r, correlation_id.clone()))?;
    let Json(resource) =
        payload.map_err(|r| ApiProblem::from_json_rejection(r, correlation_id.clone()))?;
    validate_car(&resource).map_err(|e| ApiProblem::validation(e, correlation_id.clone()))?;

    // The path id wins over any id in the body
    state
        .service
        .update(resource.with_id(id))
        .await
        .map_err(|e| ApiProblem::from_domain(e, correlation_id))?;

    info!(%id, "Car updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
pub async fn delete_car(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let correlation_id = request_correlation_id(&headers);
    let Path(id) = path.map_err(|r| ApiProblem::from_path_rejection(r, correlation_id.clone()))?;

    state
        .service
        .delete(id)
        .await
        .map_err(|e| ApiProblem::from_domain(e, correlation_id))?;

    info!(%id, "Car deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Inbound `x-request-id`, if present and non-blank.
pub fn request_correlation_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn correlation_id_ignores_blank_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_correlation_id(&headers), None);

        headers.insert("x-request-id", HeaderValue::from_static("   "));
        assert_eq!(request_correlation_id(&headers), None);

        headers.insert("x-request-id", HeaderValue::from_static(" abc-1 "));
        assert_eq!(request_correlation_id(&headers).as_deref(), Some("abc-1"));
    }
}
