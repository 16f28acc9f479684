//! Exhibitor database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{ContactInfo, DomainError, Exhibitor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exhibitors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub expo_id: Uuid,
    pub user_id: Option<Uuid>,
    pub company_name: String,
    #[sea_orm(column_type = "Text")]
    pub product_description: String,
    pub booth_selection: Option<Uuid>,
    pub status: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Exhibitor {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Exhibitor {
            id: model.id,
            expo_id: model.expo_id,
            user_id: model.user_id,
            company_name: model.company_name,
            product_description: model.product_description,
            booth_selection: model.booth_selection,
            status: model.status.parse()?,
            contact_info: ContactInfo {
                email: model.contact_email,
                phone: model.contact_phone,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
