use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InstructorDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Instructor registration request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInstructorDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user: String,
    pub password: String,
}

/// Instructor profile update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateInstructorDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedInstructorsDto {
    pub instructors: Vec<InstructorDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
