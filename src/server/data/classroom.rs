//! Classroom data repository.
//!
//! A classroom is stored as one `classroom` row plus one `classroom_schedule` row
//! per weekly slot. Every read returns the classroom with its slots attached, in
//! insertion order.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::classroom::{
    Classroom, ClassroomWithInstructor, CreateClassroomParams,
};

pub struct ClassroomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a classroom and its schedule in one transaction.
    ///
    /// # Returns
    /// - `Ok(Classroom)` - The created classroom with its schedule
    /// - `Err(DbErr)` - Database error; nothing is written when any insert fails
    pub async fn create(&self, params: CreateClassroomParams) -> Result<Classroom, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let classroom = entity::classroom::ActiveModel {
            subject: ActiveValue::Set(params.subject),
            instructor_id: ActiveValue::Set(params.instructor_id),
            link: ActiveValue::Set(params.link),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut schedule = Vec::with_capacity(params.schedule.len());
        for slot in params.schedule {
            let row = entity::classroom_schedule::ActiveModel {
                classroom_id: ActiveValue::Set(classroom.id),
                day: ActiveValue::Set(slot.day),
                start_time: ActiveValue::Set(slot.start_time),
                end_time: ActiveValue::Set(slot.end_time),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            schedule.push(row);
        }

        txn.commit().await?;

        Ok(Classroom::from_entity(classroom, schedule))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, DbErr> {
        let Some(classroom) = entity::prelude::Classroom::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let schedule = schedules_for(self.db, &[classroom.id])
            .await?
            .remove(&classroom.id)
            .unwrap_or_default();

        Ok(Some(Classroom::from_entity(classroom, schedule)))
    }

    /// Gets the classroom owned by an instructor, if they registered one.
    pub async fn find_by_instructor(&self, instructor_id: i32) -> Result<Option<Classroom>, DbErr> {
        let Some(classroom) = entity::prelude::Classroom::find()
            .filter(entity::classroom::Column::InstructorId.eq(instructor_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let schedule = schedules_for(self.db, &[classroom.id])
            .await?
            .remove(&classroom.id)
            .unwrap_or_default();

        Ok(Some(Classroom::from_entity(classroom, schedule)))
    }

    /// Gets a classroom together with its instructor's name.
    pub async fn find_with_instructor(
        &self,
        id: i32,
    ) -> Result<Option<ClassroomWithInstructor>, DbErr> {
        let Some((classroom, instructor)) = entity::prelude::Classroom::find_by_id(id)
            .find_also_related(entity::prelude::Instructor)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let schedule = schedules_for(self.db, &[classroom.id])
            .await?
            .remove(&classroom.id)
            .unwrap_or_default();

        Ok(Some(ClassroomWithInstructor {
            classroom: Classroom::from_entity(classroom, schedule),
            instructor_name: instructor.map(|i| i.name).unwrap_or_default(),
        }))
    }

    pub async fn subject_exists(&self, subject: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Classroom::find()
            .filter(entity::classroom::Column::Subject.eq(subject))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every classroom with its instructor's name, ordered by subject.
    pub async fn get_all_with_instructor(&self) -> Result<Vec<ClassroomWithInstructor>, DbErr> {
        let rows = entity::prelude::Classroom::find()
            .find_also_related(entity::prelude::Instructor)
            .order_by_asc(entity::classroom::Column::Subject)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|(c, _)| c.id).collect();
        let mut schedules = schedules_for(self.db, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|(classroom, instructor)| {
                let schedule = schedules.remove(&classroom.id).unwrap_or_default();
                ClassroomWithInstructor {
                    classroom: Classroom::from_entity(classroom, schedule),
                    instructor_name: instructor.map(|i| i.name).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Gets the classrooms with the given ids, ordered by id. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Classroom>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let classrooms = entity::prelude::Classroom::find()
            .filter(entity::classroom::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::classroom::Column::Id)
            .all(self.db)
            .await?;

        let mut schedules = schedules_for(self.db, ids).await?;

        Ok(classrooms
            .into_iter()
            .map(|classroom| {
                let schedule = schedules.remove(&classroom.id).unwrap_or_default();
                Classroom::from_entity(classroom, schedule)
            })
            .collect())
    }
}

/// Loads the schedule rows of several classrooms in one query, grouped by classroom.
async fn schedules_for<C: ConnectionTrait>(
    db: &C,
    classroom_ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::classroom_schedule::Model>>, DbErr> {
    if classroom_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = entity::prelude::ClassroomSchedule::find()
        .filter(entity::classroom_schedule::Column::ClassroomId.is_in(classroom_ids.to_vec()))
        .order_by_asc(entity::classroom_schedule::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<entity::classroom_schedule::Model>> = HashMap::new();
    for row in rows {
        grouped.entry(row.classroom_id).or_default().push(row);
    }

    Ok(grouped)
}
