use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        classroom::{ClassroomDto, CreateClassroomDto},
        instructor::{CreateInstructorDto, InstructorDto, UpdateInstructorDto},
        student::{RosterDto, RosterStudentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            classroom::CreateClassroomParams,
            instructor::{CreateInstructorParams, UpdateInstructorParams},
            student::Student,
        },
        service::{classroom::ClassroomService, instructor::InstructorService},
        state::AppState,
    },
};

/// Tag for grouping instructor endpoints in OpenAPI documentation
pub static INSTRUCTOR_TAG: &str = "instructor";

/// Register a new instructor.
///
/// Public endpoint. Every field is validated and all violations are returned
/// together.
///
/// # Returns
/// - `201 Created` - The new instructor
/// - `400 Bad Request` - Validation failed, or email, username or phone is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/instructors",
    tag = INSTRUCTOR_TAG,
    request_body = CreateInstructorDto,
    responses(
        (status = 201, description = "Successfully registered instructor", body = InstructorDto),
        (status = 400, description = "Invalid or duplicate instructor data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    Json(payload): Json<CreateInstructorDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateInstructorParams::from_dto(payload)?;

    let instructor = InstructorService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(instructor.into_dto())))
}

/// Update the logged-in instructor's profile.
///
/// # Access Control
/// - `Instructor` - Must be logged in as an instructor
/// - `Owner` - Must be the instructor being updated
///
/// # Returns
/// - `200 OK` - The updated instructor
/// - `400 Bad Request` - Validation failed or contact data taken
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not this instructor
#[utoipa::path(
    put,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor ID")),
    request_body = UpdateInstructorDto,
    responses(
        (status = 200, description = "Successfully updated instructor", body = InstructorDto),
        (status = 400, description = "Invalid instructor data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInstructorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Instructor, Permission::Owner(id)])
        .await?;

    let params = UpdateInstructorParams::from_dto(id, payload)?;

    let instructor = InstructorService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(instructor.into_dto())))
}

/// Delete the logged-in instructor's account.
///
/// The instructor's classroom, its schedule and its roster go with it. The
/// session is cleared.
///
/// # Access Control
/// - `Instructor` + `Owner`
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not this instructor
#[utoipa::path(
    delete,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Successfully deleted instructor", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Instructor, Permission::Owner(id)])
        .await?;

    InstructorService::new(&state.db).delete(id).await?;

    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Instructor deleted"))))
}

/// Register the instructor's classroom.
///
/// Each instructor owns at most one classroom and subjects are unique.
///
/// # Access Control
/// - `Instructor` + `Owner`
///
/// # Returns
/// - `201 Created` - The classroom with its schedule
/// - `400 Bad Request` - Validation failed, a classroom already exists, or the
///   subject is taken
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not this instructor
#[utoipa::path(
    post,
    path = "/api/instructors/{id}/classroom",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor ID")),
    request_body = CreateClassroomDto,
    responses(
        (status = 201, description = "Successfully registered classroom", body = ClassroomDto),
        (status = 400, description = "Invalid or duplicate classroom", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_classroom(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateClassroomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Instructor, Permission::Owner(id)])
        .await?;

    let params = CreateClassroomParams::from_dto(id, payload)?;

    let classroom = ClassroomService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(classroom.into_dto())))
}

/// List the students enrolled in the instructor's classroom.
///
/// # Access Control
/// - `Instructor` + `Owner`
///
/// # Returns
/// - `200 OK` - The roster, ordered by name
/// - `404 Not Found` - The instructor has no classroom
#[utoipa::path(
    get,
    path = "/api/instructors/{id}/students",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Classroom roster", body = RosterDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this instructor", body = ErrorDto),
        (status = 404, description = "Instructor has no classroom", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Instructor, Permission::Owner(id)])
        .await?;

    let students = ClassroomService::new(&state.db).roster(id).await?;

    let roster = RosterDto {
        students: students
            .into_iter()
            .map(Student::into_roster_dto)
            .collect::<Vec<RosterStudentDto>>(),
    };

    Ok((StatusCode::OK, Json(roster)))
}

/// Remove a student from the instructor's classroom.
///
/// # Access Control
/// - `Instructor` + `Owner`
///
/// # Returns
/// - `200 OK` - Student removed
/// - `404 Not Found` - No classroom, or the student is not on the roster
#[utoipa::path(
    delete,
    path = "/api/instructors/{id}/students/{student_id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student removed from roster", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this instructor", body = ErrorDto),
        (status = 404, description = "Classroom or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_student(
    State(state): State<AppState>,
    session: Session,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Instructor, Permission::Owner(id)])
        .await?;

    ClassroomService::new(&state.db)
        .remove_student(id, student_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Student removed from classroom"))))
}
