//! Cab provider database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Cab;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cabs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub provider: String,
    pub vehicle_type: String,
    pub base_fare: f64,
    pub per_km: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Cab {
    fn from(model: Model) -> Self {
        Cab {
            id: model.id,
            provider: model.provider,
            vehicle_type: model.vehicle_type,
            base_fare: model.base_fare,
            per_km: model.per_km,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
