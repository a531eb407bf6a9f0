//! Trip plan storage.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::base::delete_existing;
use super::entities::trip::{self, ActiveModel, Entity as TripEntity};
use crate::domain::{NewTrip, Trip, TripChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// A user's trips, soonest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Trip>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trip>>;

    async fn create(&self, user_id: Uuid, trip: NewTrip) -> AppResult<Trip>;

    async fn update(&self, id: Uuid, changes: TripChanges) -> AppResult<Trip>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct TripStore {
    db: Arc<DatabaseConnection>,
}

impl TripStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TripRepository for TripStore {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Trip>> {
        let models = TripEntity::find()
            .filter(trip::Column::UserId.eq(user_id))
            .order_by_asc(trip::Column::StartDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Trip::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trip>> {
        let result = TripEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Trip::from))
    }

    async fn create(&self, user_id: Uuid, trip: NewTrip) -> AppResult<Trip> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            destination: Set(trip.destination),
            start_date: Set(trip.start_date),
            end_date: Set(trip.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Trip::from(model))
    }

    async fn update(&self, id: Uuid, changes: TripChanges) -> AppResult<Trip> {
        let existing = TripEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(destination) = changes.destination {
            active.destination = Set(destination);
        }
        if let Some(start) = changes.start_date {
            active.start_date = Set(start);
        }
        if let Some(end) = changes.end_date {
            active.end_date = Set(end);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Trip::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<TripEntity, _>(self.db.as_ref(), id).await
    }
}
