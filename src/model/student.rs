use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub areas_of_interest: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Student registration request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub areas_of_interest: Vec<String>,
}

/// Student profile update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub areas_of_interest: Option<Vec<String>>,
}

/// Roster entry shown to instructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterStudentDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterDto {
    pub students: Vec<RosterStudentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStudentsDto {
    pub students: Vec<StudentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
