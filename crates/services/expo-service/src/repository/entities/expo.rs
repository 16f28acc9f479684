//! Expo database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Expo};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// Calendar day; (date, floors) is unique
    pub date: Date,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub theme: String,
    pub status: String,
    pub floors: i32,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Expo {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Expo {
            id: model.id,
            title: model.title,
            date: model.date,
            location: model.location,
            description: model.description,
            theme: model.theme,
            status: model.status.parse()?,
            floors: model.floors,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
