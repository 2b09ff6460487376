use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::submission::{CreateStudentFileParams, StudentFile};

pub struct StudentFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentFileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a file that has already been written to disk.
    pub async fn create(&self, params: CreateStudentFileParams) -> Result<StudentFile, DbErr> {
        let entity = entity::student_file::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            classroom_id: ActiveValue::Set(params.classroom_id),
            file_name: ActiveValue::Set(params.file_name),
            file_path: ActiveValue::Set(params.file_path),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudentFile::from_entity(entity))
    }

    /// A student's submissions for one classroom, oldest first.
    pub async fn get_by_student_and_classroom(
        &self,
        student_id: i32,
        classroom_id: i32,
    ) -> Result<Vec<StudentFile>, DbErr> {
        let files = entity::prelude::StudentFile::find()
            .filter(entity::student_file::Column::StudentId.eq(student_id))
            .filter(entity::student_file::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(entity::student_file::Column::Id)
            .all(self.db)
            .await?;

        Ok(files.into_iter().map(StudentFile::from_entity).collect())
    }
}
