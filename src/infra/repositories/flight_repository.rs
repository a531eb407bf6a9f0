//! Flight listing storage.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::base::{contains_ci, delete_existing};
use super::entities::flight::{self, ActiveModel, Entity as FlightEntity};
use crate::config::DEFAULT_FLIGHT_SEATS;
use crate::domain::search::non_blank;
use crate::domain::{Flight, FlightChanges, NewFlight, RouteQuery};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Flight>>;

    /// Flights matching the filters, earliest departure first
    async fn search(&self, query: RouteQuery) -> AppResult<Vec<Flight>>;

    async fn create(&self, flight: NewFlight) -> AppResult<Flight>;

    async fn update(&self, id: Uuid, changes: FlightChanges) -> AppResult<Flight>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct FlightStore {
    db: Arc<DatabaseConnection>,
}

impl FlightStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightRepository for FlightStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Flight>> {
        let result = FlightEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Flight::from))
    }

    async fn search(&self, query: RouteQuery) -> AppResult<Vec<Flight>> {
        let mut select = FlightEntity::find();

        if let Some(from) = non_blank(&query.from) {
            select = select.filter(contains_ci(flight::Column::Origin, from));
        }
        if let Some(to) = non_blank(&query.to) {
            select = select.filter(contains_ci(flight::Column::Destination, to));
        }
        if let Some(date) = query.date {
            select = select.filter(flight::Column::TravelDate.eq(date));
        }

        let models = select
            .order_by_asc(flight::Column::TravelDate)
            .order_by_asc(flight::Column::DepartureTime)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Flight::from).collect())
    }

    async fn create(&self, flight: NewFlight) -> AppResult<Flight> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            airline: Set(flight.airline),
            flight_number: Set(flight.flight_number),
            origin: Set(flight.from),
            destination: Set(flight.to),
            travel_date: Set(flight.date),
            departure_time: Set(flight.departure_time),
            arrival_time: Set(flight.arrival_time),
            duration: Set(flight.duration),
            price: Set(flight.price),
            seats_available: Set(flight.seats_available.unwrap_or(DEFAULT_FLIGHT_SEATS)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Flight::from(model))
    }

    async fn update(&self, id: Uuid, changes: FlightChanges) -> AppResult<Flight> {
        let existing = FlightEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(airline) = changes.airline {
            active.airline = Set(airline);
        }
        if let Some(number) = changes.flight_number {
            active.flight_number = Set(number);
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
        if let Some(duration) = changes.duration {
            active.duration = Set(duration);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(seats) = changes.seats_available {
            active.seats_available = Set(seats);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Flight::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<FlightEntity, _>(self.db.as_ref(), id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = FlightEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
