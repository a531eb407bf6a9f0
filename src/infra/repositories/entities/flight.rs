//! Flight database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Flight;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub travel_date: Date,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub seats_available: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Flight {
    fn from(model: Model) -> Self {
        Flight {
            id: model.id,
            airline: model.airline,
            flight_number: model.flight_number,
            from: model.origin,
            to: model.destination,
            date: model.travel_date,
            departure_time: model.departure_time,
            arrival_time: model.arrival_time,
            duration: model.duration,
            price: model.price,
            seats_available: model.seats_available,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
