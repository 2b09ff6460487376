use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a student to a classroom roster without any business checks.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    classroom_id: i32,
    student_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        classroom_id: ActiveValue::Set(classroom_id),
        student_id: ActiveValue::Set(student_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
