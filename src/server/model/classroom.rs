//! Classroom domain models and parameters.

use crate::{
    model::classroom::{ClassroomDto, CreateClassroomDto, SubjectDto},
    server::{
        error::validation::ValidationErrors,
        model::schedule::TimeInterval,
        util::validation::{Validator, SUBJECT_MAX_LEN},
    },
};

/// Maximum number of students on one roster.
pub const CLASSROOM_CAPACITY: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    pub id: i32,
    pub subject: String,
    pub link: String,
    pub instructor_id: i32,
    pub schedule: Vec<TimeInterval>,
}

impl Classroom {
    /// Converts a classroom row and its schedule rows at the repository boundary.
    pub fn from_entity(
        entity: entity::classroom::Model,
        schedule: Vec<entity::classroom_schedule::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            subject: entity.subject,
            link: entity.link,
            instructor_id: entity.instructor_id,
            schedule: schedule.into_iter().map(TimeInterval::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> ClassroomDto {
        ClassroomDto {
            id: self.id,
            subject: self.subject,
            link: self.link,
            instructor_id: self.instructor_id,
            schedule: self.schedule.into_iter().map(TimeInterval::into_dto).collect(),
        }
    }
}

/// A classroom together with the name of the instructor teaching it.
#[derive(Debug, Clone)]
pub struct ClassroomWithInstructor {
    pub classroom: Classroom,
    pub instructor_name: String,
}

impl ClassroomWithInstructor {
    pub fn into_subject_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.classroom.id,
            subject: self.classroom.subject,
            instructor_name: self.instructor_name,
            schedule: self
                .classroom
                .schedule
                .into_iter()
                .map(TimeInterval::into_dto)
                .collect(),
        }
    }
}

/// Validated classroom registration for one instructor.
#[derive(Debug, Clone)]
pub struct CreateClassroomParams {
    pub instructor_id: i32,
    pub subject: String,
    pub link: String,
    pub schedule: Vec<TimeInterval>,
}

impl CreateClassroomParams {
    /// Validates the subject, the link and every schedule entry.
    ///
    /// Schedule violations name the entry, e.g. `schedule[1].end_time`.
    pub fn from_dto(instructor_id: i32, dto: CreateClassroomDto) -> Result<Self, ValidationErrors> {
        let subject = dto.subject.trim().to_string();
        let link = dto.link.trim().to_string();

        let mut validator = Validator::new();
        validator
            .check(
                "subject",
                !subject.is_empty() && subject.chars().count() <= SUBJECT_MAX_LEN,
                "The subject must be between 1 and 100 characters.",
            )
            .link("link", &link)
            .check(
                "schedule",
                !dto.schedule.is_empty(),
                "The schedule must contain at least one entry.",
            );

        let mut schedule = Vec::with_capacity(dto.schedule.len());
        for (index, entry) in dto.schedule.iter().enumerate() {
            validator.check(
                format!("schedule[{}].day", index),
                !entry.day.trim().is_empty(),
                "The day is required.",
            );

            match TimeInterval::from_dto(entry) {
                Some(interval) => {
                    validator.check(
                        format!("schedule[{}].end_time", index),
                        interval.start_time < interval.end_time,
                        "The end time must be after the start time.",
                    );
                    schedule.push(interval);
                }
                None => {
                    validator.check(
                        format!("schedule[{}]", index),
                        false,
                        "Times must use the HH:MM:SS format.",
                    );
                }
            }
        }
        validator.finish()?;

        Ok(Self {
            instructor_id,
            subject,
            link,
            schedule,
        })
    }
}
