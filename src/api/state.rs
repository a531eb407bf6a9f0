//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Cache, Database};
use crate::services::{
    AuthService, BookingService, CatalogService, ServiceContainer, Services, TripService,
    UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub booking_service: Arc<dyn BookingService>,
    pub trip_service: Arc<dyn TripService>,
    /// Redis cache
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build every service over the given database.
    pub fn from_config(database: Arc<Database>, cache: Arc<Cache>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());
        Self::new(&container, cache, database, config)
    }

    /// Build state from any service container (lets tests inject mocks).
    pub fn new(
        services: &dyn ServiceContainer,
        cache: Arc<Cache>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            catalog_service: services.catalog(),
            booking_service: services.bookings(),
            trip_service: services.trips(),
            cache,
            database,
            config: Arc::new(config),
        }
    }
}
