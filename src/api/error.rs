//! Structured JSON failure body for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_getters::Getters;
use derive_new::new;
use serde::{Serialize, Serializer};

/// A field-level validation failure.
#[derive(Debug, Clone, Serialize, Getters, new)]
pub struct SubError {
    /// Name of the offending request field.
    #[new(into)]
    field: String,
    /// What was wrong with it.
    #[new(into)]
    message: String,
}

/// The body every non-2xx response carries.
///
/// `status` serializes as the HTTP status name (for example `BAD_REQUEST`)
/// and `errors` is omitted when empty.
#[derive(Debug, Clone, Serialize, Getters, new)]
pub struct ApiError {
    /// HTTP status, serialized as its canonical name.
    #[serde(serialize_with = "status_name")]
    status: StatusCode,
    /// Human-readable summary.
    #[new(into)]
    message: String,
    /// Per-field details; omitted from the body when empty.
    #[new(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<SubError>,
}

impl ApiError {
    /// A 400 body listing the fields that failed validation.
    pub fn validation(errors: Vec<SubError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "validation error".to_owned(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Serializes a status code as its upper snake case name, e.g. `NOT_FOUND`.
fn status_name<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    let name = status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_");
    serializer.serialize_str(&name)
}
