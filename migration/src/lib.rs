pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_admin_table;
mod m20261016_000002_create_instructor_table;
mod m20261016_000003_create_student_table;
mod m20261016_000004_create_classroom_table;
mod m20261016_000005_create_classroom_schedule_table;
mod m20261016_000006_create_enrollment_table;
mod m20261016_000007_create_student_file_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_admin_table::Migration),
            Box::new(m20261016_000002_create_instructor_table::Migration),
            Box::new(m20261016_000003_create_student_table::Migration),
            Box::new(m20261016_000004_create_classroom_table::Migration),
            Box::new(m20261016_000005_create_classroom_schedule_table::Migration),
            Box::new(m20261016_000006_create_enrollment_table::Migration),
            Box::new(m20261016_000007_create_student_file_table::Migration),
        ]
    }
}
