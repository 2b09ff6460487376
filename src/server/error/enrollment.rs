use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business-rule rejection of an enrollment attempt.
///
/// All variants are terminal: retrying the same request yields the same answer
/// until the underlying data changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentRejection {
    /// Student or classroom reference is not a well-formed identifier.
    #[error("Please provide a valid id.")]
    InvalidIdentifier,

    /// Student or classroom does not exist. Carries which one.
    #[error("{0} not found!")]
    NotFound(&'static str),

    /// The classroom roster already contains the student.
    #[error("You are already enrolled in this class")]
    AlreadyEnrolled,

    /// The classroom's schedule overlaps classes the student already attends.
    ///
    /// Each entry reads `"<subject> at <day> <HH:MM:SS>"`.
    #[error("Unfortunately this class is in conflict with another class!")]
    ScheduleConflict(Vec<String>),

    /// The roster is at the capacity limit.
    #[error("Unfortunately, the course already has all vacancies occupied")]
    CapacityExceeded,
}

/// Converts enrollment rejections into HTTP responses.
///
/// `NotFound` → 404; every other rejection → 400. Schedule conflicts list the
/// conflicting classes in the `conflicts` field.
impl IntoResponse for EnrollmentRejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let mut body = ErrorDto::new(self.to_string());
        if let Self::ScheduleConflict(conflicts) = self {
            body.conflicts = conflicts;
        }

        (status, Json(body)).into_response()
    }
}
