//! Migration: Create booths table.

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
                    .table(Booths::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Booths::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Booths::ExpoId).uuid().not_null())
                    .col(ColumnDef::new(Booths::AssignedTo).uuid().null())
                    .col(ColumnDef::new(Booths::Floor).integer().not_null())
                    .col(ColumnDef::new(Booths::BoothNumber).string().not_null())
                    .col(ColumnDef::new(Booths::Length).double().not_null())
                    .col(ColumnDef::new(Booths::Width).double().not_null())
                    .col(ColumnDef::new(Booths::SizeUnit).string_len(4).not_null())
                    .col(ColumnDef::new(Booths::Status).string_len(24).not_null())
                    .col(ColumnDef::new(Booths::Price).decimal_len(12, 2).null())
                    .col(
                        ColumnDef::new(Booths::HasPower)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Booths::HasWifi)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Booths::IsCornerBooth)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Booths::Notes).text().not_null())
                    .col(
                        ColumnDef::new(Booths::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Booths::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booths_expo")
                            .from(Booths::Table, Booths::ExpoId)
                            .to(Expos::Table, Expos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Store-enforced booth number uniqueness per floor per expo
        manager
            .create_index(
                Index::create()
                    .name("idx_booths_expo_floor_number")
                    .table(Booths::Table)
                    .col(Booths::ExpoId)
                    .col(Booths::Floor)
                    .col(Booths::BoothNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booths::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Booths {
    Table,
    Id,
    ExpoId,
    AssignedTo,
    Floor,
    BoothNumber,
    Length,
    Width,
    SizeUnit,
    Status,
    Price,
    HasPower,
    HasWifi,
    IsCornerBooth,
    Notes,
    CreatedAt,
    UpdatedAt,
}
