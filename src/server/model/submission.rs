//! Student file submissions.

use chrono::{DateTime, Utc};

use crate::model::submission::StudentFileDto;

/// File extensions accepted for submissions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFile {
    pub id: i32,
    pub student_id: i32,
    pub classroom_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

impl StudentFile {
    pub fn from_entity(entity: entity::student_file::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            classroom_id: entity.classroom_id,
            file_name: entity.file_name,
            file_path: entity.file_path,
            created_at: entity.created_at,
        }
    }

    /// The stored path stays server-side.
    pub fn into_dto(self) -> StudentFileDto {
        StudentFileDto {
            id: self.id,
            student_id: self.student_id,
            classroom_id: self.classroom_id,
            file_name: self.file_name,
            created_at: self.created_at,
        }
    }
}

/// An uploaded document waiting to be stored.
#[derive(Debug, Clone)]
pub struct UploadParams {
    pub student_id: i32,
    pub classroom_id: i32,
    /// File name as sent by the client.
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Row data for a file already written to disk.
#[derive(Debug, Clone)]
pub struct CreateStudentFileParams {
    pub student_id: i32,
    pub classroom_id: i32,
    pub file_name: String,
    pub file_path: String,
}
