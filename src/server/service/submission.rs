//! Student file submissions.
//!
//! Files are written under `<upload_dir>/<classroom_id>/<student_id>/` with a random
//! prefix so repeated uploads of the same name never overwrite each other.

use rand::Rng;
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};

use crate::server::{
    data::{
        classroom::ClassroomRepository, enrollment::EnrollmentRepository,
        student::StudentRepository, student_file::StudentFileRepository,
    },
    error::AppError,
    model::submission::{CreateStudentFileParams, StudentFile, UploadParams, ALLOWED_EXTENSIONS},
};

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Stores an uploaded document and records it.
    ///
    /// # Returns
    /// - `Ok(StudentFile)` - The file is on disk and recorded
    /// - `Err(AppError::BadRequest)` - Empty file or unsupported extension
    /// - `Err(AppError::NotFound)` - Unknown student or classroom, or the student is
    ///   not enrolled in the classroom
    /// - `Err(AppError::IoErr)` - The file could not be written
    pub async fn upload(&self, params: UploadParams) -> Result<StudentFile, AppError> {
        let file_name = sanitize_file_name(&params.file_name);

        if !has_allowed_extension(&file_name) {
            return Err(AppError::BadRequest(
                "Only pdf, docx and txt files are accepted".to_string(),
            ));
        }

        if params.contents.is_empty() {
            return Err(AppError::BadRequest("The file is empty".to_string()));
        }

        self.ensure_enrolled(params.student_id, params.classroom_id)
            .await?;

        let dir = self
            .upload_dir
            .join(params.classroom_id.to_string())
            .join(params.student_id.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        let prefix: u64 = rand::rng().random();
        let path: PathBuf = dir.join(format!("{:016x}-{}", prefix, file_name));
        tokio::fs::write(&path, &params.contents).await?;

        let recorded = StudentFileRepository::new(self.db)
            .create(CreateStudentFileParams {
                student_id: params.student_id,
                classroom_id: params.classroom_id,
                file_name,
                file_path: path.to_string_lossy().into_owned(),
            })
            .await;

        match recorded {
            Ok(file) => {
                tracing::info!(
                    "Student {} submitted {} to classroom {}",
                    file.student_id,
                    file.file_name,
                    file.classroom_id
                );
                Ok(file)
            }
            Err(e) => {
                if let Err(io) = tokio::fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", path.display(), io);
                }
                Err(e.into())
            }
        }
    }

    /// A student's submissions for one classroom, oldest first.
    pub async fn list(&self, student_id: i32, classroom_id: i32) -> Result<Vec<StudentFile>, AppError> {
        self.ensure_enrolled(student_id, classroom_id).await?;

        Ok(StudentFileRepository::new(self.db)
            .get_by_student_and_classroom(student_id, classroom_id)
            .await?)
    }

    async fn ensure_enrolled(&self, student_id: i32, classroom_id: i32) -> Result<(), AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found!".to_string()));
        }

        if ClassroomRepository::new(self.db)
            .find_by_id(classroom_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Classroom not found!".to_string()));
        }

        if !EnrollmentRepository::new(self.db)
            .is_enrolled(classroom_id, student_id)
            .await?
        {
            return Err(AppError::NotFound(
                "You are not enrolled in this class!".to_string(),
            ));
        }

        Ok(())
    }
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}

pub fn has_allowed_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
