//! Migration: Create attendees table.

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
                    .table(Attendees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendees::ExpoId).uuid().not_null())
                    .col(ColumnDef::new(Attendees::FullName).string().not_null())
                    .col(ColumnDef::new(Attendees::Email).string().not_null())
                    .col(ColumnDef::new(Attendees::Phone).string().not_null())
                    .col(ColumnDef::new(Attendees::Organization).string().not_null())
                    .col(
                        ColumnDef::new(Attendees::BadgeId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Attendees::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Attendees::RegistrationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendees::Attachment).string().null())
                    .col(
                        ColumnDef::new(Attendees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendees_expo")
                            .from(Attendees::Table, Attendees::ExpoId)
                            .to(Expos::Table, Expos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per email per expo
        manager
            .create_index(
                Index::create()
                    .name("idx_attendees_email_expo")
                    .table(Attendees::Table)
                    .col(Attendees::Email)
                    .col(Attendees::ExpoId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Attendees {
    Table,
    Id,
    ExpoId,
    FullName,
    Email,
    Phone,
    Organization,
    BadgeId,
    Status,
    RegistrationDate,
    Attachment,
    CreatedAt,
    UpdatedAt,
}
