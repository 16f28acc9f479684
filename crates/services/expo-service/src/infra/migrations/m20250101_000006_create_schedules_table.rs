//! Migration: Create schedules table.

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_expos_table::Expos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedules::ExpoId).uuid().not_null())
                    .col(ColumnDef::new(Schedules::SessionName).string().not_null())
                    .col(
                        ColumnDef::new(Schedules::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Schedules::Speaker).string().not_null())
                    .col(ColumnDef::new(Schedules::Location).string().not_null())
                    .col(ColumnDef::new(Schedules::Description).text().not_null())
                    .col(
                        ColumnDef::new(Schedules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_expo")
                            .from(Schedules::Table, Schedules::ExpoId)
                            .to(Expos::Table, Expos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Schedules {
    Table,
    Id,
    ExpoId,
    SessionName,
    StartTime,
    EndTime,
    Speaker,
    Location,
    Description,
    CreatedAt,
    UpdatedAt,
}
