//! Booth database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Booth, DomainError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booths")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub expo_id: Uuid,
    /// Exhibitor holding the booth; written only by the approval workflow
    pub assigned_to: Option<Uuid>,
    pub floor: i32,
    pub booth_number: String,
    pub length: f64,
    pub width: f64,
    pub size_unit: String,
    pub status: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub has_power: bool,
    pub has_wifi: bool,
    pub is_corner_booth: bool,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Booth {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Booth {
            id: model.id,
            expo_id: model.expo_id,
            assigned_to: model.assigned_to,
            floor: model.floor,
            booth_number: model.booth_number,
            length: model.length,
            width: model.width,
            size_unit: model.size_unit.parse()?,
            status: model.status.parse()?,
            price: model.price,
            has_power: model.has_power,
            has_wifi: model.has_wifi,
            is_corner_booth: model.is_corner_booth,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
