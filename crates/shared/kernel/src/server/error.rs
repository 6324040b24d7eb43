use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pethub_derive::api_model;

/// JSON body returned for every non-2xx API response.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. `not_found`)
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: error.into(), message: message.into() }
    }

    /// Pairs the body with `status`.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
