//! Hotel database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Hotel;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub price_per_night: f64,
    pub rating: f64,
    pub image: Option<String>,
    /// JSON array of strings
    pub amenities: Json,
    pub rooms_available: i32,
    pub featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Hotel {
    fn from(model: Model) -> Self {
        Hotel {
            id: model.id,
            name: model.name,
            city: model.city,
            address: model.address,
            description: model.description,
            price_per_night: model.price_per_night,
            rating: model.rating,
            image: model.image,
            amenities: serde_json::from_value(model.amenities).unwrap_or_default(),
            rooms_available: model.rooms_available,
            featured: model.featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
