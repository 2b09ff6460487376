//! Classroom factory for creating classrooms together with their schedule.

use crate::factory::helpers::next_id;
use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classrooms.
///
/// Schedule slots are given as `HH:MM:SS` strings; an unparseable time is reported as
/// `DbErr::Custom` so tests fail loudly.
pub struct ClassroomFactory<'a> {
    db: &'a DatabaseConnection,
    instructor_id: i32,
    subject: String,
    link: String,
    slots: Vec<(String, String, String)>,
}

impl<'a> ClassroomFactory<'a> {
    /// Creates a new ClassroomFactory with default values.
    ///
    /// Defaults:
    /// - subject: `"Subject {id}"`
    /// - link: `"https://classroom.example.com/{id}"`
    /// - schedule: no slots; `build()` adds Monday 09:00:00-09:50:00 if none were set
    pub fn new(db: &'a DatabaseConnection, instructor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            instructor_id,
            subject: format!("Subject {}", id),
            link: format!("https://classroom.example.com/{}", id),
            slots: Vec::new(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Adds a weekly schedule slot.
    pub fn slot(mut self, day: &str, start_time: &str, end_time: &str) -> Self {
        self.slots
            .push((day.to_string(), start_time.to_string(), end_time.to_string()));
        self
    }

    /// Builds and inserts the classroom and its schedule rows.
    pub async fn build(self) -> Result<entity::classroom::Model, DbErr> {
        let now = Utc::now();
        let classroom = entity::classroom::ActiveModel {
            subject: ActiveValue::Set(self.subject),
            instructor_id: ActiveValue::Set(self.instructor_id),
            link: ActiveValue::Set(self.link),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let slots = if self.slots.is_empty() {
            vec![(
                "Monday".to_string(),
                "09:00:00".to_string(),
                "09:50:00".to_string(),
            )]
        } else {
            self.slots
        };

        for (day, start_time, end_time) in slots {
            entity::classroom_schedule::ActiveModel {
                classroom_id: ActiveValue::Set(classroom.id),
                day: ActiveValue::Set(day),
                start_time: ActiveValue::Set(parse_time(&start_time)?),
                end_time: ActiveValue::Set(parse_time(&end_time)?),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(classroom)
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, DbErr> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|e| DbErr::Custom(format!("invalid factory time '{}': {}", value, e)))
}

/// Creates a classroom with default values owned by `instructor_id`.
pub async fn create_classroom(
    db: &DatabaseConnection,
    instructor_id: i32,
) -> Result<entity::classroom::Model, DbErr> {
    ClassroomFactory::new(db, instructor_id).build().await
}
