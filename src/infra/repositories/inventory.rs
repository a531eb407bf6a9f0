//! Seat and room counters.
//!
//! Reservations are single conditional `UPDATE`s: the counter only drops
//! when enough units remain, so concurrent bookings can never drive it
//! below zero.

use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::{bus, flight, hotel};
use crate::domain::BookingKind;
use crate::errors::{AppError, AppResult};

/// Take `units` seats or rooms from a listing.
///
/// Fails with `InsufficientInventory` when fewer than `units` remain, or
/// `NotFound` when the listing was deleted after it was looked up.
/// Kinds without inventory are a no-op.
pub(crate) async fn reserve<C>(conn: &C, kind: BookingKind, item_id: Uuid, units: i32) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let affected = match kind {
        BookingKind::Bus => {
            bus::Entity::update_many()
                .col_expr(
                    bus::Column::SeatsAvailable,
                    Expr::col(bus::Column::SeatsAvailable).sub(units),
                )
                .col_expr(bus::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(bus::Column::Id.eq(item_id))
                .filter(bus::Column::SeatsAvailable.gte(units))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Flight => {
            flight::Entity::update_many()
                .col_expr(
                    flight::Column::SeatsAvailable,
                    Expr::col(flight::Column::SeatsAvailable).sub(units),
                )
                .col_expr(flight::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(flight::Column::Id.eq(item_id))
                .filter(flight::Column::SeatsAvailable.gte(units))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Hotel => {
            hotel::Entity::update_many()
                .col_expr(
                    hotel::Column::RoomsAvailable,
                    Expr::col(hotel::Column::RoomsAvailable).sub(units),
                )
                .col_expr(hotel::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(hotel::Column::Id.eq(item_id))
                .filter(hotel::Column::RoomsAvailable.gte(units))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Package | BookingKind::Cab => return Ok(()),
    };

    if affected == 0 {
        if !listing_exists(conn, kind, item_id).await? {
            return Err(AppError::NotFound);
        }
        return Err(AppError::insufficient(kind.sold_out_message()));
    }

    Ok(())
}

async fn listing_exists<C>(conn: &C, kind: BookingKind, item_id: Uuid) -> AppResult<bool>
where
    C: ConnectionTrait,
{
    let found = match kind {
        BookingKind::Bus => bus::Entity::find_by_id(item_id).one(conn).await?.is_some(),
        BookingKind::Flight => flight::Entity::find_by_id(item_id).one(conn).await?.is_some(),
        BookingKind::Hotel => hotel::Entity::find_by_id(item_id).one(conn).await?.is_some(),
        BookingKind::Package | BookingKind::Cab => true,
    };
    Ok(found)
}

/// Hand `units` seats or rooms back to a listing.
///
/// Returns `false` when the listing no longer exists.
pub(crate) async fn release<C>(conn: &C, kind: BookingKind, item_id: Uuid, units: i32) -> AppResult<bool>
where
    C: ConnectionTrait,
{
    let affected = match kind {
        BookingKind::Bus => {
            bus::Entity::update_many()
                .col_expr(
                    bus::Column::SeatsAvailable,
                    Expr::col(bus::Column::SeatsAvailable).add(units),
                )
                .col_expr(bus::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(bus::Column::Id.eq(item_id))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Flight => {
            flight::Entity::update_many()
                .col_expr(
                    flight::Column::SeatsAvailable,
                    Expr::col(flight::Column::SeatsAvailable).add(units),
                )
                .col_expr(flight::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(flight::Column::Id.eq(item_id))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Hotel => {
            hotel::Entity::update_many()
                .col_expr(
                    hotel::Column::RoomsAvailable,
                    Expr::col(hotel::Column::RoomsAvailable).add(units),
                )
                .col_expr(hotel::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(hotel::Column::Id.eq(item_id))
                .exec(conn)
                .await?
                .rows_affected
        }
        BookingKind::Package | BookingKind::Cab => return Ok(false),
    };

    Ok(affected > 0)
}
