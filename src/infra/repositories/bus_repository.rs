//! Bus listing storage.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::base::{contains_ci, delete_existing};
use super::entities::bus::{self, ActiveModel, Entity as BusEntity};
use crate::config::DEFAULT_BUS_SEATS;
use crate::domain::search::non_blank;
use crate::domain::{Bus, BusChanges, NewBus, RouteQuery};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BusRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bus>>;

    /// Buses matching the filters, earliest departure first
    async fn search(&self, query: RouteQuery) -> AppResult<Vec<Bus>>;

    async fn create(&self, bus: NewBus) -> AppResult<Bus>;

    async fn update(&self, id: Uuid, changes: BusChanges) -> AppResult<Bus>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Remove every bus; returns how many were deleted
    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct BusStore {
    db: Arc<DatabaseConnection>,
}

impl BusStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusRepository for BusStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bus>> {
        let result = BusEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Bus::from))
    }

    async fn search(&self, query: RouteQuery) -> AppResult<Vec<Bus>> {
        let mut select = BusEntity::find();

        if let Some(from) = non_blank(&query.from) {
            select = select.filter(contains_ci(bus::Column::Origin, from));
        }
        if let Some(to) = non_blank(&query.to) {
            select = select.filter(contains_ci(bus::Column::Destination, to));
        }
        if let Some(date) = query.date {
            select = select.filter(bus::Column::TravelDate.eq(date));
        }

        let models = select
            .order_by_asc(bus::Column::TravelDate)
            .order_by_asc(bus::Column::DepartureTime)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Bus::from).collect())
    }

    async fn create(&self, bus: NewBus) -> AppResult<Bus> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(bus.name),
            origin: Set(bus.from),
            destination: Set(bus.to),
            travel_date: Set(bus.date),
            departure_time: Set(bus.departure_time),
            arrival_time: Set(bus.arrival_time),
            price: Set(bus.price),
            seats_available: Set(bus.seats_available.unwrap_or(DEFAULT_BUS_SEATS)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Bus::from(model))
    }

    async fn update(&self, id: Uuid, changes: BusChanges) -> AppResult<Bus> {
        let existing = BusEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(from) = changes.from {
            active.origin = Set(from);
        }
        if let Some(to) = changes.to {
            active.destination = Set(to);
        }
        if let Some(date) = changes.date {
            active.travel_date = Set(date);
        }
        if let Some(departure) = changes.departure_time {
            active.departure_time = Set(departure);
        }
        if let Some(arrival) = changes.arrival_time {
            active.arrival_time = Set(arrival);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(seats) = changes.seats_available {
            active.seats_available = Set(seats);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Bus::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<BusEntity, _>(self.db.as_ref(), id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = BusEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
