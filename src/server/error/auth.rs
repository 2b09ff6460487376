use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is bound to the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("{role} {user_id} from session not found in database")]
    UserNotInDatabase {
        /// Account id stored in the session
        user_id: i32,
        /// Role stored in the session
        role: Role,
    },

    /// The user is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The message is only logged.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login request without a username or password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Login attempted without user or password")]
    MissingCredentials,

    /// Unknown username or wrong password.
    ///
    /// Results in a 400 Bad Request response; the same message is returned for both
    /// cases so usernames cannot be probed.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `MissingCredentials` / `InvalidCredentials` → 400 Bad Request
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase { .. } => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You are not authorized to access this action",
            ),
            Self::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Please provide user and password",
            ),
            Self::InvalidCredentials(_) => (StatusCode::BAD_REQUEST, "Invalid credentials"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
