//! Enrollment snapshots and results.
//!
//! The decision logic works on snapshots read once per request: the target
//! classroom with its roster and schedule, and every class the student already
//! attends.

use crate::{
    model::enrollment::EnrollmentDto,
    server::model::{classroom::Classroom, schedule::TimeInterval, student::Student},
};

/// A class the student attends, reduced to what conflict detection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledClass {
    pub subject: String,
    pub schedule: Vec<TimeInterval>,
}

impl From<Classroom> for ScheduledClass {
    fn from(classroom: Classroom) -> Self {
        Self {
            subject: classroom.subject,
            schedule: classroom.schedule,
        }
    }
}

/// Every class a student is enrolled in at the time of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentScheduleSnapshot {
    pub student_id: i32,
    pub classes: Vec<ScheduledClass>,
}

/// Target classroom as seen by the decision: roster and schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomSnapshot {
    pub classroom_id: i32,
    pub subject: String,
    pub schedule: Vec<TimeInterval>,
    /// Ids of the students currently on the roster.
    pub roster: Vec<i32>,
}

/// Result of the conditional insert that persists an accepted enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Inserted,
    /// The roster filled up between the decision and the insert.
    Full,
    /// A concurrent request enrolled the same student first.
    AlreadyPresent,
}

/// A persisted enrollment with the data needed for the reply and notification.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub student: Student,
    pub classroom: Classroom,
    pub instructor_name: String,
}

impl Enrollment {
    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            message: "Congratulations on the inscription".to_string(),
            student_id: self.student.id,
            classroom_id: self.classroom.id,
            subject: self.classroom.subject,
            schedule: self
                .classroom
                .schedule
                .into_iter()
                .map(TimeInterval::into_dto)
                .collect(),
        }
    }
}
