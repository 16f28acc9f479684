//! Attendee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Attendee, DomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub expo_id: Uuid,
    pub full_name: String,
    /// Stored normalized; (email, expo_id) is unique
    pub email: String,
    pub phone: String,
    pub organization: String,
    #[sea_orm(unique)]
    pub badge_id: String,
    pub status: String,
    pub registration_date: DateTimeUtc,
    pub attachment: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Attendee {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Attendee {
            id: model.id,
            expo_id: model.expo_id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            organization: model.organization,
            badge_id: model.badge_id,
            status: model.status.parse()?,
            registration_date: model.registration_date,
            attachment: model.attachment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
