//! Migration: Create expos table.
//!
//! The unique (date, floors) index is what actually prevents two expos from
//! booking the same slot when creations race.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Expos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Expos::Title).string().not_null())
                    .col(ColumnDef::new(Expos::Date).date().not_null())
                    .col(ColumnDef::new(Expos::Location).string().not_null())
                    .col(ColumnDef::new(Expos::Description).text().not_null())
                    .col(ColumnDef::new(Expos::Theme).string().not_null())
                    .col(ColumnDef::new(Expos::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Expos::Floors).integer().not_null())
                    .col(ColumnDef::new(Expos::Image).string().null())
                    .col(
                        ColumnDef::new(Expos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Expos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expos_date_floors")
                    .table(Expos::Table)
                    .col(Expos::Date)
                    .col(Expos::Floors)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Expos {
    Table,
    Id,
    Title,
    Date,
    Location,
    Description,
    Theme,
    Status,
    Floors,
    Image,
    CreatedAt,
    UpdatedAt,
}
