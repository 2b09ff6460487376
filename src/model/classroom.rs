use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One weekly slot of a classroom schedule. Times use `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntryDto {
    #[schema(example = "Monday")]
    pub day: String,
    #[schema(example = "09:00:00")]
    pub start_time: String,
    #[schema(example = "09:50:00")]
    pub end_time: String,
}

/// Classroom registration request sent by an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClassroomDto {
    pub subject: String,
    pub link: String,
    pub schedule: Vec<ScheduleEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassroomDto {
    pub id: i32,
    pub subject: String,
    pub link: String,
    pub instructor_id: i32,
    pub schedule: Vec<ScheduleEntryDto>,
}

/// Classroom as listed to students browsing subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub subject: String,
    pub instructor_name: String,
    pub schedule: Vec<ScheduleEntryDto>,
}
