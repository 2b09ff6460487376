use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000002_create_instructor_table::Instructor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Classroom::Id))
                    .col(string_uniq(Classroom::Subject))
                    .col(integer_uniq(Classroom::InstructorId))
                    .col(string(Classroom::Link))
                    .col(
                        timestamp_with_time_zone(Classroom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Classroom::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classroom_instructor_id")
                            .from(Classroom::Table, Classroom::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Classroom {
    Table,
    Id,
    Subject,
    InstructorId,
    Link,
    CreatedAt,
    UpdatedAt,
}
