//! Holiday package database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Package;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub destination: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub duration: String,
    pub featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Package {
    fn from(model: Model) -> Self {
        Package {
            id: model.id,
            destination: model.destination,
            description: model.description,
            price: model.price,
            image: model.image,
            duration: model.duration,
            featured: model.featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
