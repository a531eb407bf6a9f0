//! Service Container - centralized service access.
//!
//! Handlers depend on the `ServiceContainer` trait and the service traits
//! it hands out, never on the concrete implementations.

use std::sync::Arc;

use super::{AuthService, BookingService, CatalogService, TripService, UserService};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn users(&self) -> Arc<dyn UserService>;
    fn catalog(&self) -> Arc<dyn CatalogService>;
    fn bookings(&self) -> Arc<dyn BookingService>;
    fn trips(&self) -> Arc<dyn TripService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    catalog_service: Arc<dyn CatalogService>,
    booking_service: Arc<dyn BookingService>,
    trip_service: Arc<dyn TripService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        catalog_service: Arc<dyn CatalogService>,
        booking_service: Arc<dyn BookingService>,
        trip_service: Arc<dyn TripService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            catalog_service,
            booking_service,
            trip_service,
        }
    }

    /// Wire every service over one shared `Persistence` unit of work.
    pub fn from_connection(db: Arc<sea_orm::DatabaseConnection>, config: Config) -> Self {
        use super::{Authenticator, BookingManager, Catalog, TripPlanner, UserManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            catalog_service: Arc::new(Catalog::new(uow.clone())),
            booking_service: Arc::new(BookingManager::new(uow.clone())),
            trip_service: Arc::new(TripPlanner::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }

    fn trips(&self) -> Arc<dyn TripService> {
        self.trip_service.clone()
    }
}
