//! Schedule database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Schedule, TimeSlot};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub expo_id: Uuid,
    pub session_name: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub speaker: String,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Schedule {
    fn from(model: Model) -> Self {
        Schedule {
            id: model.id,
            expo_id: model.expo_id,
            session_name: model.session_name,
            time_slot: TimeSlot {
                start: model.start_time,
                end: model.end_time,
            },
            speaker: model.speaker,
            location: model.location,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
