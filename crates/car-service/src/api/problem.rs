use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::car_store::CarError;
use crate::model::{FieldViolation, ValidationErrors};

pub type ApiResult<T> = Result<T, ApiProblem>;

/// An `application/problem+json` error response.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    title: &'static str,
    kind: &'static str,
    detail: String,
    violations: Vec<FieldViolation>,
    correlation_id: String,
}

impl ApiProblem {
    pub fn from_domain(error: CarError, correlation_id: Option<String>) -> Self {
        match error {
            CarError::Validation(errors) => Self::validation(errors, correlation_id),
            CarError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                "Not found",
                "urn:car-service:problem:not-found",
                error.to_string(),
                correlation_id,
            ),
            CarError::Persistence(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage error",
                "urn:car-service:problem:storage",
                error.to_string(),
                correlation_id,
            ),
        }
    }

    pub fn validation(errors: ValidationErrors, correlation_id: Option<String>) -> Self {
        let mut problem = Self::new(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            "urn:car-service:problem:validation",
            errors.to_string(),
            correlation_id,
        );
        problem.violations = errors.violations().to_vec();
        problem
    }

    /// Unreadable body: wrong content type, broken JSON or a missing/ill-typed field.
    pub fn from_json_rejection(rejection: JsonRejection, correlation_id: Option<String>) -> Self {
        Self::validation(
            ValidationErrors::single("body", rejection.body_text()),
            correlation_id,
        )
    }

    /// Path segment that is not a UUID.
    pub fn from_path_rejection(rejection: PathRejection, correlation_id: Option<String>) -> Self {
        Self::validation(
            ValidationErrors::single("id", rejection.body_text()),
            correlation_id,
        )
    }

    pub fn internal(detail: impl Into<String>, correlation_id: Option<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "urn:car-service:problem:internal",
            detail,
            correlation_id,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(
        status: StatusCode,
        title: &'static str,
        kind: &'static str,
        detail: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Self {
        Self {
            status,
            title,
            kind,
            detail: detail.into(),
            violations: Vec::new(),
            // Reuse the caller's x-request-id so logs and payload share one key
            correlation_id: correlation_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'static str,
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<FieldViolation>,
    correlation_id: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let payload = ProblemDetails {
            kind: self.kind,
            title: self.title,
            status: self.status.as_u16(),
            detail: self.detail,
            violations: self.violations,
            correlation_id: self.correlation_id,
        };

        let mut response = (self.status, Json(payload)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        response
    }
}
