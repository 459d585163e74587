//! # HTTP Rejections
//!
//! Response types for requests that fail query validation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::validation::ValidationError;

/// Response body for a rejected request
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<ValidationError>,
}

/// A request whose query parameters failed validation.
///
/// Renders as `400 Bad Request` with `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRejection {
    errors: Vec<ValidationError>,
}

impl QueryRejection {
    /// Wraps `errors`, or returns `None` when there is nothing to reject
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for QueryRejection {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorsResponse {
            errors: self.errors,
        });
        (status, body).into_response()
    }
}
