//! Repository layer - Data access abstraction
//!
//! Each listing type, bookings, trips and users get a trait plus a
//! SeaORM-backed `*Store`. Services only see the traits.

mod base;
mod booking_repository;
mod bus_repository;
mod cab_repository;
pub(crate) mod entities;
mod flight_repository;
mod hotel_repository;
pub(crate) mod inventory;
mod package_repository;
mod trip_repository;
mod user_repository;

pub(crate) use booking_repository::{cancel_booking, insert_booking};
pub use booking_repository::{BookingRepository, BookingStore};
pub use bus_repository::{BusRepository, BusStore};
pub use cab_repository::{CabRepository, CabStore};
pub use flight_repository::{FlightRepository, FlightStore};
pub use hotel_repository::{HotelRepository, HotelStore};
pub use package_repository::{PackageRepository, PackageStore};
pub use trip_repository::{TripRepository, TripStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use bus_repository::MockBusRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use cab_repository::MockCabRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use flight_repository::MockFlightRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use hotel_repository::MockHotelRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use package_repository::MockPackageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use trip_repository::MockTripRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
