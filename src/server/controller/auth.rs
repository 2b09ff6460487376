use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthUserDto, LoginDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::auth::LoginParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an instructor or a student.
///
/// Instructors are checked before students. On success the user's id and role
/// are bound to the session cookie.
///
/// # Returns
/// - `200 OK` - Logged in; body is the current user
/// - `400 Bad Request` - Missing fields or invalid credentials
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AuthUserDto),
        (status = 400, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).login(params).await?;

    AuthSession::new(&session)
        .set_user(user.session_user())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in as an admin.
///
/// # Returns
/// - `200 OK` - Logged in; body is the current user
/// - `400 Bad Request` - Missing fields or invalid credentials
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AuthUserDto),
        (status = 400, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).admin_login(params).await?;

    AuthSession::new(&session)
        .set_user(user.session_user())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and destroy the session.
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `401 Unauthorized` - Nobody was logged in
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if auth_session.get_user().await?.is_none() {
        return Err(AuthError::UserNotInSession.into());
    }

    auth_session.clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Nobody is logged in or the account was deleted
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = AuthUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
