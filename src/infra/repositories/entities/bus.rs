//! Bus database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Bus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "buses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub travel_date: Date,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub seats_available: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Bus {
    fn from(model: Model) -> Self {
        Bus {
            id: model.id,
            name: model.name,
            from: model.origin,
            to: model.destination,
            date: model.travel_date,
            departure_time: model.departure_time,
            arrival_time: model.arrival_time,
            price: model.price,
            seats_available: model.seats_available,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
