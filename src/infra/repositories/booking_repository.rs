//! Booking storage.
//!
//! The insert and status helpers are generic over the connection so the
//! transactional booking flow in `unit_of_work` shares them.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::domain::{Booking, BookingStatus, NewBooking};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// A user's bookings, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>>;

    /// Insert a booking that holds no seats or rooms
    async fn create(&self, booking: NewBooking) -> AppResult<Booking>;

    /// Flip a booking to `Cancelled`; fails if it already was
    async fn mark_cancelled(&self, id: Uuid) -> AppResult<()>;
}

pub struct BookingStore {
    db: Arc<DatabaseConnection>,
}

impl BookingStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        BookingEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Booking::try_from)
            .transpose()
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        BookingEntity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        insert_booking(self.db.as_ref(), booking).await
    }

    async fn mark_cancelled(&self, id: Uuid) -> AppResult<()> {
        cancel_booking(self.db.as_ref(), id).await
    }
}

pub(crate) async fn insert_booking<C>(conn: &C, booking: NewBooking) -> AppResult<Booking>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(booking.user_id),
        kind: Set(booking.kind.to_string()),
        item_id: Set(booking.item_id),
        quantity: Set(booking.quantity),
        booking_date: Set(now),
        total_amount: Set(booking.total_amount),
        status: Set(BookingStatus::Confirmed.to_string()),
        details: Set(booking.details),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(conn).await?;
    Booking::try_from(model)
}

/// Conditional status flip, so two concurrent cancellations cannot both
/// succeed and hand inventory back twice.
pub(crate) async fn cancel_booking<C>(conn: &C, id: Uuid) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let cancelled = BookingStatus::Cancelled.as_str();
    let result = BookingEntity::update_many()
        .col_expr(booking::Column::Status, Expr::value(cancelled))
        .col_expr(booking::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
        .filter(booking::Column::Id.eq(id))
        .filter(booking::Column::Status.ne(cancelled))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::bad_request("Booking is already cancelled"));
    }

    Ok(())
}
