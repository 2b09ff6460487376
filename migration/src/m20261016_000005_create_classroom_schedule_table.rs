use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000004_create_classroom_table::Classroom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassroomSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassroomSchedule::Id))
                    .col(integer(ClassroomSchedule::ClassroomId))
                    .col(string(ClassroomSchedule::Day))
                    .col(time(ClassroomSchedule::StartTime))
                    .col(time(ClassroomSchedule::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classroom_schedule_classroom_id")
                            .from(ClassroomSchedule::Table, ClassroomSchedule::ClassroomId)
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
            .drop_table(Table::drop().table(ClassroomSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassroomSchedule {
    Table,
    Id,
    ClassroomId,
    Day,
    StartTime,
    EndTime,
}
