//! Migration: Create exhibitors table.

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_expos_table::Expos;
use super::m20250101_000003_create_booths_table::Booths;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exhibitors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exhibitors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exhibitors::ExpoId).uuid().not_null())
                    .col(ColumnDef::new(Exhibitors::UserId).uuid().null())
                    .col(ColumnDef::new(Exhibitors::CompanyName).string().not_null())
                    .col(
                        ColumnDef::new(Exhibitors::ProductDescription)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exhibitors::BoothSelection).uuid().null())
                    .col(ColumnDef::new(Exhibitors::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Exhibitors::ContactEmail).string().not_null())
                    .col(ColumnDef::new(Exhibitors::ContactPhone).string().not_null())
                    .col(
                        ColumnDef::new(Exhibitors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exhibitors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibitors_expo")
                            .from(Exhibitors::Table, Exhibitors::ExpoId)
                            .to(Expos::Table, Expos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibitors_booth_selection")
                            .from(Exhibitors::Table, Exhibitors::BoothSelection)
                            .to(Booths::Table, Booths::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exhibitors_expo_status")
                    .table(Exhibitors::Table)
                    .col(Exhibitors::ExpoId)
                    .col(Exhibitors::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exhibitors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Exhibitors {
    Table,
    Id,
    ExpoId,
    UserId,
    CompanyName,
    ProductDescription,
    BoothSelection,
    Status,
    ContactEmail,
    ContactPhone,
    CreatedAt,
    UpdatedAt,
}
