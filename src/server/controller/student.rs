use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        classroom::{ClassroomDto, SubjectDto},
        enrollment::EnrollmentDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
        submission::{StudentFileDto, UploadFileForm},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            classroom::{Classroom, ClassroomWithInstructor},
            student::{CreateStudentParams, UpdateStudentParams},
            submission::{StudentFile, UploadParams},
        },
        service::{
            classroom::ClassroomService,
            enrollment::{parse_references, EnrollmentService},
            student::StudentService,
            submission::SubmissionService,
        },
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Multipart field carrying the submitted document.
const UPLOAD_FIELD: &str = "file";

/// Register a new student.
///
/// Public endpoint. Every field is validated and all violations are returned
/// together.
///
/// # Returns
/// - `201 Created` - The new student
/// - `400 Bad Request` - Validation failed, or email, username or phone is taken
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully registered student", body = StudentDto),
        (status = 400, description = "Invalid or duplicate student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(payload)?;

    let student = StudentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Update the logged-in student's profile.
///
/// # Access Control
/// - `Student` + `Owner`
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student, Permission::Owner(id)])
        .await?;

    let params = UpdateStudentParams::from_dto(id, payload)?;

    let student = StudentService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete the logged-in student's account and clear the session.
///
/// # Access Control
/// - `Student` + `Owner`
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student, Permission::Owner(id)])
        .await?;

    StudentService::new(&state.db).delete(id).await?;

    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Student deleted"))))
}

/// List every classroom open for enrollment.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/students/subjects",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All classrooms with instructor and schedule", body = Vec<SubjectDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let subjects = ClassroomService::new(&state.db).list_subjects().await?;

    Ok((
        StatusCode::OK,
        Json(
            subjects
                .into_iter()
                .map(ClassroomWithInstructor::into_subject_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List the classrooms the student is enrolled in.
///
/// # Access Control
/// - `Student` + `Owner`
#[utoipa::path(
    get,
    path = "/api/students/{id}/classrooms",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Enrolled classrooms", body = Vec<ClassroomDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classrooms(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student, Permission::Owner(id)])
        .await?;

    let classrooms = StudentService::new(&state.db).classrooms(id).await?;

    Ok((
        StatusCode::OK,
        Json(
            classrooms
                .into_iter()
                .map(Classroom::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Enroll the student into a classroom.
///
/// Rejections, first match wins: malformed ids (400), unknown student or
/// classroom (404), already enrolled (400), schedule conflict (400, with the
/// conflicting classes in `conflicts`), classroom full (400).
///
/// # Access Control
/// - `Student` + `Owner` of `id`
#[utoipa::path(
    post,
    path = "/api/students/{id}/classrooms/{classroom_id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID"),
        ("classroom_id" = String, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Successfully enrolled", body = EnrollmentDto),
        (status = 400, description = "Invalid id, already enrolled, schedule conflict or classroom full", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to enroll this student", body = ErrorDto),
        (status = 404, description = "Student or classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll(
    State(state): State<AppState>,
    session: Session,
    Path((student_ref, classroom_ref)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let (student_id, classroom_id) = parse_references(&student_ref, &classroom_ref)?;
    user.ensure_owner(student_id)?;

    let enrollment = EnrollmentService::new(&state.db, &state.mail)
        .enroll(student_id, classroom_id)
        .await?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

/// Leave a classroom.
///
/// # Access Control
/// - `Student` + `Owner` of `id`
#[utoipa::path(
    delete,
    path = "/api/students/{id}/classrooms/{classroom_id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID"),
        ("classroom_id" = String, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Successfully left the classroom", body = MessageDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this student", body = ErrorDto),
        (status = 404, description = "Student, classroom or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unenroll(
    State(state): State<AppState>,
    session: Session,
    Path((student_ref, classroom_ref)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let (student_id, classroom_id) = parse_references(&student_ref, &classroom_ref)?;
    user.ensure_owner(student_id)?;

    EnrollmentService::new(&state.db, &state.mail)
        .unenroll(student_id, classroom_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("You canceled your subscription")),
    ))
}

/// Submit a document to a classroom.
///
/// Multipart body with a `file` field. Accepted extensions are `pdf`, `docx`
/// and `txt`; the student must be enrolled in the classroom.
///
/// # Access Control
/// - `Student` + `Owner` of `id`
#[utoipa::path(
    post,
    path = "/api/students/{id}/classrooms/{classroom_id}/files",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID"),
        ("classroom_id" = String, Path, description = "Classroom ID")
    ),
    request_body(content = UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = StudentFileDto),
        (status = 400, description = "Invalid id, missing file or unsupported extension", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this student", body = ErrorDto),
        (status = 404, description = "Student, classroom or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    Path((student_ref, classroom_ref)): Path<(String, String)>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let (student_id, classroom_id) = parse_references(&student_ref, &classroom_ref)?;
    user.ensure_owner(student_id)?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let contents = field.bytes().await?.to_vec();
            upload = Some((file_name, contents));
            break;
        }
    }

    let Some((file_name, contents)) = upload else {
        return Err(AppError::BadRequest(
            "Please provide a file in the 'file' field".to_string(),
        ));
    };

    let file = SubmissionService::new(&state.db, &state.upload_dir)
        .upload(UploadParams {
            student_id,
            classroom_id,
            file_name,
            contents,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(file.into_dto())))
}

/// List the student's submissions for a classroom.
///
/// # Access Control
/// - `Student` + `Owner` of `id`
#[utoipa::path(
    get,
    path = "/api/students/{id}/classrooms/{classroom_id}/files",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID"),
        ("classroom_id" = String, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Submitted files", body = Vec<StudentFileDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this student", body = ErrorDto),
        (status = 404, description = "Student, classroom or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_files(
    State(state): State<AppState>,
    session: Session,
    Path((student_ref, classroom_ref)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let (student_id, classroom_id) = parse_references(&student_ref, &classroom_ref)?;
    user.ensure_owner(student_id)?;

    let files = SubmissionService::new(&state.db, &state.upload_dir)
        .list(student_id, classroom_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(files.into_iter().map(StudentFile::into_dto).collect::<Vec<_>>()),
    ))
}
