use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::classroom::ScheduleEntryDto;

/// Successful enrollment acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDto {
    pub message: String,
    pub student_id: i32,
    pub classroom_id: i32,
    pub subject: String,
    pub schedule: Vec<ScheduleEntryDto>,
}
