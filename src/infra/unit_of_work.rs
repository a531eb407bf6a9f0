//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-step writes (reserving
//! inventory and recording the booking) in one database transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    cancel_booking, insert_booking, inventory, BookingRepository, BookingStore, BusRepository,
    BusStore, CabRepository, CabStore, FlightRepository, FlightStore, HotelRepository, HotelStore,
    PackageRepository, PackageStore, TripRepository, TripStore, UserRepository, UserStore,
};
use crate::domain::{Booking, BookingKind, NewBooking};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic transaction methods.
/// Tests either implement it by hand over mocked repositories or drive
/// `Persistence` with a SeaORM mock connection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;
    fn buses(&self) -> Arc<dyn BusRepository>;
    fn flights(&self) -> Arc<dyn FlightRepository>;
    fn hotels(&self) -> Arc<dyn HotelRepository>;
    fn packages(&self) -> Arc<dyn PackageRepository>;
    fn cabs(&self) -> Arc<dyn CabRepository>;
    fn bookings(&self) -> Arc<dyn BookingRepository>;
    fn trips(&self) -> Arc<dyn TripRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Seat and room counters for this transaction
    pub fn inventory(&self) -> TxInventory<'_> {
        TxInventory { txn: self.txn }
    }

    /// Booking writes for this transaction
    pub fn bookings(&self) -> TxBookingRepository<'_> {
        TxBookingRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    user_repo: Arc<UserStore>,
    bus_repo: Arc<BusStore>,
    flight_repo: Arc<FlightStore>,
    hotel_repo: Arc<HotelStore>,
    package_repo: Arc<PackageStore>,
    cab_repo: Arc<CabStore>,
    booking_repo: Arc<BookingStore>,
    trip_repo: Arc<TripStore>,
}

impl Persistence {
    /// Accepts an owned or already shared connection.
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        let db = db.into();
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            bus_repo: Arc::new(BusStore::new(db.clone())),
            flight_repo: Arc::new(FlightStore::new(db.clone())),
            hotel_repo: Arc::new(HotelStore::new(db.clone())),
            package_repo: Arc::new(PackageStore::new(db.clone())),
            cab_repo: Arc::new(CabStore::new(db.clone())),
            booking_repo: Arc::new(BookingStore::new(db.clone())),
            trip_repo: Arc::new(TripStore::new(db.clone())),
            db,
        }
    }

    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn buses(&self) -> Arc<dyn BusRepository> {
        self.bus_repo.clone()
    }

    fn flights(&self) -> Arc<dyn FlightRepository> {
        self.flight_repo.clone()
    }

    fn hotels(&self) -> Arc<dyn HotelRepository> {
        self.hotel_repo.clone()
    }

    fn packages(&self) -> Arc<dyn PackageRepository> {
        self.package_repo.clone()
    }

    fn cabs(&self) -> Arc<dyn CabRepository> {
        self.cab_repo.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.booking_repo.clone()
    }

    fn trips(&self) -> Arc<dyn TripRepository> {
        self.trip_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(f).await
    }
}

/// Transaction-bound seat and room counters.
pub struct TxInventory<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxInventory<'a> {
    /// Atomically take `units` from the listing or fail with `InsufficientInventory`.
    pub async fn reserve(&self, kind: BookingKind, item_id: Uuid, units: i32) -> AppResult<()> {
        inventory::reserve(self.txn, kind, item_id, units).await
    }

    /// Give `units` back; `false` if the listing has since been deleted.
    pub async fn release(&self, kind: BookingKind, item_id: Uuid, units: i32) -> AppResult<bool> {
        inventory::release(self.txn, kind, item_id, units).await
    }
}

/// Transaction-bound booking writes.
pub struct TxBookingRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBookingRepository<'a> {
    pub async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        insert_booking(self.txn, booking).await
    }

    pub async fn mark_cancelled(&self, id: Uuid) -> AppResult<()> {
        cancel_booking(self.txn, id).await
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;
    use crate::infra::repositories::entities::{booking, hotel};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn booking_model(kind: BookingKind, item_id: Uuid, quantity: i32) -> booking::Model {
        let now = chrono::Utc::now();
        booking::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: kind.to_string(),
            item_id,
            quantity,
            booking_date: now,
            total_amount: 5000.0,
            status: BookingStatus::Confirmed.to_string(),
            details: json!({}),
            created_at: now,
            updated_at: now,
        }
    }

    fn hotel_model(id: Uuid, rooms_available: i32) -> hotel::Model {
        let now = chrono::Utc::now();
        hotel::Model {
            id,
            name: "The Leela".to_string(),
            city: "Goa".to_string(),
            address: None,
            description: None,
            price_per_night: 12000.0,
            rating: 5.0,
            image: None,
            amenities: json!([]),
            rooms_available,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn new_booking(kind: BookingKind, item_id: Uuid, quantity: i32) -> NewBooking {
        NewBooking {
            user_id: Uuid::new_v4(),
            kind,
            item_id,
            quantity,
            total_amount: 5000.0,
            details: json!({}),
        }
    }

    #[tokio::test]
    async fn test_reserve_and_insert_commit_together() {
        let item_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![booking_model(BookingKind::Bus, item_id, 2)]])
            .into_connection();
        let uow = Persistence::new(db);

        let result = with_transaction!(uow, |ctx| {
            ctx.inventory().reserve(BookingKind::Bus, item_id, 2).await?;
            ctx.bookings().create(new_booking(BookingKind::Bus, item_id, 2)).await
        });

        let booking = result.unwrap();
        assert_eq!(booking.kind, BookingKind::Bus);
        assert_eq!(booking.quantity, 2);
    }

    #[tokio::test]
    async fn test_reserve_fails_when_sold_out() {
        let item_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![hotel_model(item_id, 0)]])
            .into_connection();
        let uow = Persistence::new(db);

        let result: AppResult<Booking> = with_transaction!(uow, |ctx| {
            ctx.inventory().reserve(BookingKind::Hotel, item_id, 1).await?;
            ctx.bookings().create(new_booking(BookingKind::Hotel, item_id, 1)).await
        });

        match result {
            Err(AppError::InsufficientInventory(msg)) => assert_eq!(msg, "No rooms available"),
            other => panic!("expected InsufficientInventory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reserve_on_deleted_listing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([Vec::<hotel::Model>::new()])
            .into_connection();
        let uow = Persistence::new(db);

        let result = with_transaction!(uow, |ctx| {
            ctx.inventory().reserve(BookingKind::Hotel, Uuid::new_v4(), 1).await
        });

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_stores_share_one_connection() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let uow = Persistence::new(Arc::clone(&db));

        // Ours, the unit of work's, and one per store
        assert_eq!(Arc::strong_count(&db), 10);
        drop(uow);
        assert_eq!(Arc::strong_count(&db), 1);
    }

    #[tokio::test]
    async fn test_release_reports_missing_listing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let uow = Persistence::new(db);

        let restored = with_transaction!(uow, |ctx| {
            ctx.inventory().release(BookingKind::Flight, Uuid::new_v4(), 3).await
        });

        assert!(!restored.unwrap());
    }

    #[tokio::test]
    async fn test_packages_hold_no_inventory() {
        // No results queued: any statement would fail the mock
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let uow = Persistence::new(db);

        let result = with_transaction!(uow, |ctx| {
            ctx.inventory().reserve(BookingKind::Package, Uuid::new_v4(), 1).await
        });

        assert!(result.is_ok());
    }
}
