use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldViolationDto};

/// A single rule a request field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every field violation found in one request.
///
/// Never constructed empty; `Validator::finish` returns `Ok` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Request validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    /// Returns true when some violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

/// Converts validation errors into a 400 Bad Request listing each violation.
impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let body = ErrorDto {
            error: "Invalid request".to_string(),
            violations: self
                .0
                .into_iter()
                .map(|v| FieldViolationDto {
                    field: v.field,
                    message: v.message,
                })
                .collect(),
            conflicts: Vec::new(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
