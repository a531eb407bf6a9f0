//! Shared fixtures for the service tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use voyago::domain::{Booking, BookingKind, BookingStatus, Package, Trip, User, UserRole};
use voyago::errors::{AppError, AppResult};
use voyago::infra::{
    BookingRepository, BusRepository, CabRepository, FlightRepository, HotelRepository,
    MockBookingRepository, MockBusRepository, MockCabRepository, MockFlightRepository,
    MockHotelRepository, MockPackageRepository, MockTripRepository, MockUserRepository,
    PackageRepository, TransactionContext, TripRepository, UnitOfWork, UserRepository,
};

/// Hand-written Unit of Work over mockall repositories.
///
/// Repositories left unset are fresh mocks, so any call to them panics.
/// Transactions are refused, which lets tests prove a path never opens one.
pub struct TestUnitOfWork {
    pub users: Arc<MockUserRepository>,
    pub buses: Arc<MockBusRepository>,
    pub flights: Arc<MockFlightRepository>,
    pub hotels: Arc<MockHotelRepository>,
    pub packages: Arc<MockPackageRepository>,
    pub cabs: Arc<MockCabRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub trips: Arc<MockTripRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            buses: Arc::new(MockBusRepository::new()),
            flights: Arc::new(MockFlightRepository::new()),
            hotels: Arc::new(MockHotelRepository::new()),
            packages: Arc::new(MockPackageRepository::new()),
            cabs: Arc::new(MockCabRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
            trips: Arc::new(MockTripRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub fn with_users(users: MockUserRepository) -> Self {
        Self {
            users: Arc::new(users),
            ..Default::default()
        }
    }

    pub fn with_bookings(bookings: MockBookingRepository) -> Self {
        Self {
            bookings: Arc::new(bookings),
            ..Default::default()
        }
    }

    pub fn with_trips(trips: MockTripRepository) -> Self {
        Self {
            trips: Arc::new(trips),
            ..Default::default()
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn buses(&self) -> Arc<dyn BusRepository> {
        self.buses.clone()
    }

    fn flights(&self) -> Arc<dyn FlightRepository> {
        self.flights.clone()
    }

    fn hotels(&self) -> Arc<dyn HotelRepository> {
        self.hotels.clone()
    }

    fn packages(&self) -> Arc<dyn PackageRepository> {
        self.packages.clone()
    }

    fn cabs(&self) -> Arc<dyn CabRepository> {
        self.cabs.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.bookings.clone()
    }

    fn trips(&self) -> Arc<dyn TripRepository> {
        self.trips.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

pub fn user(id: Uuid, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id,
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        password_hash: String::new(),
        role,
        created_at: now,
        updated_at: now,
    }
}

pub fn booking(user_id: Uuid, kind: BookingKind, status: BookingStatus) -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        user_id,
        kind,
        item_id: Uuid::new_v4(),
        quantity: if kind.holds_inventory() { 2 } else { 1 },
        booking_date: now,
        total_amount: 5000.0,
        status,
        details: serde_json::json!({}),
        created_at: now,
        updated_at: now,
    }
}

pub fn package(price: f64) -> Package {
    let now = Utc::now();
    Package {
        id: Uuid::new_v4(),
        destination: "Kerala Backwaters".to_string(),
        description: "A serene trip through the backwaters of Alleppey.".to_string(),
        price,
        image: None,
        duration: "5 Days / 4 Nights".to_string(),
        featured: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

pub fn trip(user_id: Uuid) -> Trip {
    let now = Utc::now();
    Trip {
        id: Uuid::new_v4(),
        user_id,
        destination: "Goa".to_string(),
        start_date: day(11, 10),
        end_date: day(11, 14),
        created_at: now,
        updated_at: now,
    }
}
