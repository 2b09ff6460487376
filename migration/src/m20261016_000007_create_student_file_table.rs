use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000003_create_student_table::Student,
    m20261016_000004_create_classroom_table::Classroom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentFile::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentFile::Id))
                    .col(integer(StudentFile::StudentId))
                    .col(integer(StudentFile::ClassroomId))
                    .col(string(StudentFile::FileName))
                    .col(string(StudentFile::FilePath))
                    .col(
                        timestamp_with_time_zone(StudentFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_file_student_id")
                            .from(StudentFile::Table, StudentFile::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_file_classroom_id")
                            .from(StudentFile::Table, StudentFile::ClassroomId)
                            .to(Classroom::Table, Classroom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentFile {
    Table,
    Id,
    StudentId,
    ClassroomId,
    FileName,
    FilePath,
    CreatedAt,
}
