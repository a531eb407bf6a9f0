//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and repositories (PostgreSQL via SeaORM)
//! - Redis cache for users and rate limiting
//! - Unit of Work for transaction management

pub mod cache;
pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use repositories::{
    BookingRepository, BusRepository, CabRepository, FlightRepository, HotelRepository,
    PackageRepository, TripRepository, UserRepository,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockBookingRepository, MockBusRepository, MockCabRepository, MockFlightRepository,
    MockHotelRepository, MockPackageRepository, MockTripRepository, MockUserRepository,
};
