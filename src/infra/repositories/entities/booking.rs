//! Booking database entity.

use sea_orm::entity::prelude::*;

use crate::domain::{Booking, BookingKind, BookingStatus};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// `Bus`, `Flight`, `Hotel`, `Package` or `Cab`
    pub kind: String,
    pub item_id: Uuid,
    pub quantity: i32,
    pub booking_date: DateTimeUtc,
    pub total_amount: f64,
    pub status: String,
    pub details: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Booking {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: model.id,
            user_id: model.user_id,
            kind: model.kind.parse::<BookingKind>()?,
            item_id: model.item_id,
            quantity: model.quantity,
            booking_date: model.booking_date,
            total_amount: model.total_amount,
            status: BookingStatus::from(model.status.as_str()),
            details: model.details,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
