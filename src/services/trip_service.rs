//! Trip service - personal trip plans, visible only to their owner.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Actor, NewTrip, Trip, TripChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait TripService: Send + Sync {
    async fn list_trips(&self, actor: Actor) -> AppResult<Vec<Trip>>;
    async fn create_trip(&self, actor: Actor, trip: NewTrip) -> AppResult<Trip>;
    async fn get_trip(&self, actor: Actor, id: Uuid) -> AppResult<Trip>;
    async fn update_trip(&self, actor: Actor, id: Uuid, changes: TripChanges) -> AppResult<Trip>;
    async fn delete_trip(&self, actor: Actor, id: Uuid) -> AppResult<()>;
}

pub struct TripPlanner<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TripPlanner<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn owned(&self, actor: Actor, id: Uuid) -> AppResult<Trip> {
        let trip = self
            .uow
            .trips()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        actor.ensure_owner(trip.user_id)?;
        Ok(trip)
    }
}

#[async_trait]
impl<U: UnitOfWork> TripService for TripPlanner<U> {
    async fn list_trips(&self, actor: Actor) -> AppResult<Vec<Trip>> {
        self.uow.trips().list_for_user(actor.id).await
    }

    async fn create_trip(&self, actor: Actor, trip: NewTrip) -> AppResult<Trip> {
        trip.check_dates()?;
        self.uow.trips().create(actor.id, trip).await
    }

    async fn get_trip(&self, actor: Actor, id: Uuid) -> AppResult<Trip> {
        self.owned(actor, id).await
    }

    async fn update_trip(&self, actor: Actor, id: Uuid, changes: TripChanges) -> AppResult<Trip> {
        let current = self.owned(actor, id).await?;
        changes.check_against(&current)?;
        self.uow.trips().update(id, changes).await
    }

    async fn delete_trip(&self, actor: Actor, id: Uuid) -> AppResult<()> {
        self.owned(actor, id).await?;
        self.uow.trips().delete(id).await
    }
}
