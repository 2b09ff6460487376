//! Enrollment data repository.
//!
//! One `enrollment` row links a student to a classroom; it stands for both the
//! classroom's roster entry and the student's class list entry.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, Statement,
};

use crate::server::model::{enrollment::EnrollmentOutcome, student::Student};

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ids of the students on a classroom's roster, in enrollment order.
    pub async fn roster(&self, classroom_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Enrollment::find()
            .select_only()
            .column(entity::enrollment::Column::StudentId)
            .filter(entity::enrollment::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Students on a classroom's roster, ordered by name.
    pub async fn roster_students(&self, classroom_id: i32) -> Result<Vec<Student>, DbErr> {
        entity::prelude::Student::find()
            .inner_join(entity::prelude::Enrollment)
            .filter(entity::enrollment::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Student::from_entity)
            .collect()
    }

    /// Ids of the classrooms a student is enrolled in, in enrollment order.
    pub async fn classroom_ids_for_student(&self, student_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Enrollment::find()
            .select_only()
            .column(entity::enrollment::Column::ClassroomId)
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn is_enrolled(&self, classroom_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::ClassroomId.eq(classroom_id))
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a student to a roster unless the roster is full.
    ///
    /// The seat count and the insert are one conditional statement, so two requests
    /// racing for the last seat serialize on SQLite's write lock and at most one of
    /// them inserts. A duplicate hits the unique (classroom, student) index and is
    /// reported instead of raised.
    ///
    /// # Arguments
    /// - `classroom_id` - Target classroom
    /// - `student_id` - Student to add
    /// - `capacity` - Maximum roster size
    ///
    /// # Returns
    /// - `Ok(EnrollmentOutcome::Inserted)` - The student is now on the roster
    /// - `Ok(EnrollmentOutcome::Full)` - The roster already holds `capacity` students
    /// - `Ok(EnrollmentOutcome::AlreadyPresent)` - The student was already on the roster
    /// - `Err(DbErr)` - Any other database error
    pub async fn create_within_capacity(
        &self,
        classroom_id: i32,
        student_id: i32,
        capacity: usize,
    ) -> Result<EnrollmentOutcome, DbErr> {
        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "INSERT INTO enrollment (classroom_id, student_id, created_at) \
             SELECT ?, ?, ? \
             WHERE (SELECT COUNT(*) FROM enrollment WHERE classroom_id = ?) < ?",
            [
                classroom_id.into(),
                student_id.into(),
                Utc::now().into(),
                classroom_id.into(),
                (capacity as i64).into(),
            ],
        );

        match self.db.execute_raw(statement).await {
            Ok(result) if result.rows_affected() == 0 => Ok(EnrollmentOutcome::Full),
            Ok(_) => Ok(EnrollmentOutcome::Inserted),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(EnrollmentOutcome::AlreadyPresent)
            }
            Err(err) => Err(err),
        }
    }

    /// Removes a student from a roster.
    ///
    /// # Returns
    /// - `Ok(true)` - The enrollment existed and was removed
    /// - `Ok(false)` - The student was not enrolled
    pub async fn delete(&self, classroom_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::ClassroomId.eq(classroom_id))
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
