use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentFileDto {
    pub id: i32,
    pub student_id: i32,
    pub classroom_id: i32,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Multipart body of a file submission; only documents the form for OpenAPI.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFileForm {
    /// The document to submit (`pdf`, `docx` or `txt`).
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
