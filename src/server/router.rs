use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::AdminDto,
        api::{ErrorDto, FieldViolationDto, MessageDto},
        auth::{AuthUserDto, LoginDto, Role},
        classroom::{ClassroomDto, CreateClassroomDto, ScheduleEntryDto, SubjectDto},
        enrollment::EnrollmentDto,
        instructor::{
            CreateInstructorDto, InstructorDto, PaginatedInstructorsDto, UpdateInstructorDto,
        },
        student::{
            CreateStudentDto, PaginatedStudentsDto, RosterDto, RosterStudentDto, StudentDto,
            UpdateStudentDto,
        },
        submission::{StudentFileDto, UploadFileForm},
    },
    server::{
        controller::{admin, auth, instructor, student},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Schoolboard API"),
    paths(
        auth::login,
        auth::admin_login,
        auth::logout,
        auth::get_user,
        instructor::create_instructor,
        instructor::update_instructor,
        instructor::delete_instructor,
        instructor::create_classroom,
        instructor::get_students,
        instructor::remove_student,
        student::create_student,
        student::update_student,
        student::delete_student,
        student::get_subjects,
        student::get_classrooms,
        student::enroll,
        student::unenroll,
        student::upload_file,
        student::get_files,
        admin::get_admins,
        admin::get_instructors,
        admin::get_students,
    ),
    components(schemas(
        AdminDto,
        AuthUserDto,
        ClassroomDto,
        CreateClassroomDto,
        CreateInstructorDto,
        CreateStudentDto,
        EnrollmentDto,
        ErrorDto,
        FieldViolationDto,
        InstructorDto,
        LoginDto,
        MessageDto,
        PaginatedInstructorsDto,
        PaginatedStudentsDto,
        Role,
        RosterDto,
        RosterStudentDto,
        ScheduleEntryDto,
        StudentDto,
        StudentFileDto,
        SubjectDto,
        UpdateInstructorDto,
        UpdateStudentDto,
        UploadFileForm,
    )),
    tags(
        (name = "auth", description = "Login, logout and the current session user"),
        (name = "instructor", description = "Instructor accounts, classrooms and rosters"),
        (name = "student", description = "Student accounts, enrollment and file submissions"),
        (name = "admin", description = "Administrative listings"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/instructors", post(instructor::create_instructor))
        .route(
            "/api/instructors/{id}",
            put(instructor::update_instructor).delete(instructor::delete_instructor),
        )
        .route(
            "/api/instructors/{id}/classroom",
            post(instructor::create_classroom),
        )
        .route("/api/instructors/{id}/students", get(instructor::get_students))
        .route(
            "/api/instructors/{id}/students/{student_id}",
            delete(instructor::remove_student),
        )
        .route("/api/students", post(student::create_student))
        .route("/api/students/subjects", get(student::get_subjects))
        .route(
            "/api/students/{id}",
            put(student::update_student).delete(student::delete_student),
        )
        .route("/api/students/{id}/classrooms", get(student::get_classrooms))
        .route(
            "/api/students/{id}/classrooms/{classroom_id}",
            post(student::enroll).delete(student::unenroll),
        )
        .route(
            "/api/students/{id}/classrooms/{classroom_id}/files",
            post(student::upload_file).get(student::get_files),
        )
        .route("/api/admin/admins", get(admin::get_admins))
        .route("/api/admin/instructors", get(admin::get_instructors))
        .route("/api/admin/students", get(admin::get_students))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
