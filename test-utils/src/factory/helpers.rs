//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an instructor and a classroom owned by them.
///
/// The classroom gets a single Monday 09:00:00-09:50:00 slot.
///
/// # Returns
/// - `Ok((instructor, classroom))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_classroom_with_instructor(
    db: &DatabaseConnection,
) -> Result<(entity::instructor::Model, entity::classroom::Model), DbErr> {
    let instructor = crate::factory::instructor::create_instructor(db).await?;
    let classroom = crate::factory::classroom::create_classroom(db, instructor.id).await?;

    Ok((instructor, classroom))
}

/// Fills a classroom roster with `count` freshly created students.
///
/// # Returns
/// - `Ok(Vec<student>)` - The students that were enrolled
/// - `Err(DbErr)` - Database error during creation
pub async fn fill_roster(
    db: &DatabaseConnection,
    classroom_id: i32,
    count: usize,
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(count);

    for _ in 0..count {
        let student = crate::factory::student::create_student(db).await?;
        crate::factory::enrollment::create_enrollment(db, classroom_id, student.id).await?;
        students.push(student);
    }

    Ok(students)
}
