//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and infrastructure. Each one is a
//! trait plus an implementation generic over the Unit of Work, so tests
//! can swap the persistence underneath.

mod auth_service;
mod booking_service;
mod catalog_service;
pub mod container;
mod trip_service;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, AuthSession, Authenticator, Claims, TokenResponse};
pub use booking_service::{BookingManager, BookingService};
pub use catalog_service::{Catalog, CatalogService};
pub use trip_service::{TripPlanner, TripService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
