//! Booking service - reserving listings and managing the resulting bookings.
//!
//! Buses, flights and hotels carry inventory. Booking one takes the seats
//! or room with a conditional update and inserts the booking row in the
//! same transaction; cancelling hands them back the same way.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::ROOMS_PER_HOTEL_BOOKING;
use crate::domain::{
    seat_total, stay_total, Actor, Booking, BookingKind, BookingStatus, BusBookingRequest,
    CabBookingRequest, FlightBookingRequest, HotelBookingRequest, NewBooking,
    PackageBookingRequest, Stay,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book_bus(&self, actor: Actor, request: BusBookingRequest) -> AppResult<Booking>;
    async fn book_flight(&self, actor: Actor, request: FlightBookingRequest) -> AppResult<Booking>;
    async fn book_hotel(&self, actor: Actor, request: HotelBookingRequest) -> AppResult<Booking>;
    async fn book_package(&self, actor: Actor, request: PackageBookingRequest) -> AppResult<Booking>;
    async fn book_cab(&self, actor: Actor, request: CabBookingRequest) -> AppResult<Booking>;

    /// Bookings of `user_id`, newest first; the user themself or an admin
    async fn list_for_user(&self, actor: Actor, user_id: Uuid) -> AppResult<Vec<Booking>>;

    /// A single booking; its owner or an admin
    async fn get_booking(&self, actor: Actor, id: Uuid) -> AppResult<Booking>;

    /// Cancel one of the caller's own bookings
    async fn cancel(&self, actor: Actor, id: Uuid) -> AppResult<Booking>;
}

pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookingManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Take the inventory and record the booking atomically.
    async fn reserve_and_record(&self, booking: NewBooking) -> AppResult<Booking> {
        let (kind, item_id) = (booking.kind, booking.item_id);
        let created = with_transaction!(self.uow, |ctx| {
            ctx.inventory()
                .reserve(booking.kind, booking.item_id, booking.quantity)
                .await?;
            ctx.bookings().create(booking).await
        })
        .map_err(|e| {
            if matches!(e, AppError::InsufficientInventory(_)) {
                tracing::info!(kind = %kind, item_id = %item_id, "Booking rejected: sold out");
            }
            e
        })?;

        log_confirmed(&created);
        Ok(created)
    }

    /// Record a booking that holds no inventory.
    async fn record(&self, booking: NewBooking) -> AppResult<Booking> {
        let created = self.uow.bookings().create(booking).await?;
        log_confirmed(&created);
        Ok(created)
    }

    async fn find(&self, id: Uuid) -> AppResult<Booking> {
        self.uow
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }
}

fn log_confirmed(booking: &Booking) {
    tracing::info!(
        booking_id = %booking.id,
        user_id = %booking.user_id,
        kind = %booking.kind,
        item_id = %booking.item_id,
        quantity = booking.quantity,
        total_amount = booking.total_amount,
        "Booking confirmed"
    );
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn book_bus(&self, actor: Actor, request: BusBookingRequest) -> AppResult<Booking> {
        let bus = self
            .uow
            .buses()
            .find_by_id(request.bus_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let booking = NewBooking {
            user_id: actor.id,
            kind: BookingKind::Bus,
            item_id: bus.id,
            quantity: request.seats,
            total_amount: seat_total(bus.price, request.seats)?,
            details: bus.snapshot(request.seats),
        };

        self.reserve_and_record(booking).await
    }

    async fn book_flight(&self, actor: Actor, request: FlightBookingRequest) -> AppResult<Booking> {
        let flight = self
            .uow
            .flights()
            .find_by_id(request.flight_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let booking = NewBooking {
            user_id: actor.id,
            kind: BookingKind::Flight,
            item_id: flight.id,
            quantity: request.seats,
            total_amount: seat_total(flight.price, request.seats)?,
            details: flight.snapshot(request.seats),
        };

        self.reserve_and_record(booking).await
    }

    async fn book_hotel(&self, actor: Actor, request: HotelBookingRequest) -> AppResult<Booking> {
        let stay = Stay::resolve(
            request.nights,
            request.check_in,
            request.check_out,
            Utc::now().date_naive(),
        )?;

        let hotel = self
            .uow
            .hotels()
            .find_by_id(request.hotel_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let booking = NewBooking {
            user_id: actor.id,
            kind: BookingKind::Hotel,
            item_id: hotel.id,
            quantity: ROOMS_PER_HOTEL_BOOKING,
            total_amount: stay_total(hotel.price_per_night, stay.nights)?,
            details: hotel.snapshot(&stay),
        };

        self.reserve_and_record(booking).await
    }

    async fn book_package(&self, actor: Actor, request: PackageBookingRequest) -> AppResult<Booking> {
        let package = self
            .uow
            .packages()
            .find_by_id(request.package_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.record(NewBooking {
            user_id: actor.id,
            kind: BookingKind::Package,
            item_id: package.id,
            quantity: 1,
            total_amount: package.price,
            details: package.snapshot(),
        })
        .await
    }

    async fn book_cab(&self, actor: Actor, request: CabBookingRequest) -> AppResult<Booking> {
        if request.distance_km < 0.0 {
            return Err(AppError::validation("Distance cannot be negative"));
        }

        let cab = self
            .uow
            .cabs()
            .find_by_id(request.cab_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.record(NewBooking {
            user_id: actor.id,
            kind: BookingKind::Cab,
            item_id: cab.id,
            quantity: 1,
            total_amount: cab.fare(request.distance_km),
            details: cab.snapshot(&request.origin, &request.destination, request.distance_km),
        })
        .await
    }

    async fn list_for_user(&self, actor: Actor, user_id: Uuid) -> AppResult<Vec<Booking>> {
        actor.ensure_can_view(user_id)?;
        self.uow.bookings().list_for_user(user_id).await
    }

    async fn get_booking(&self, actor: Actor, id: Uuid) -> AppResult<Booking> {
        let booking = self.find(id).await?;
        actor.ensure_can_view(booking.user_id)?;
        Ok(booking)
    }

    async fn cancel(&self, actor: Actor, id: Uuid) -> AppResult<Booking> {
        let booking = self.find(id).await?;
        actor.ensure_owner(booking.user_id)?;
        booking.ensure_cancellable()?;

        match booking.held_inventory() {
            Some(units) => {
                let (kind, item_id) = (booking.kind, booking.item_id);
                let restored = with_transaction!(self.uow, |ctx| {
                    ctx.bookings().mark_cancelled(id).await?;
                    ctx.inventory().release(kind, item_id, units).await
                })?;

                if !restored {
                    tracing::warn!(
                        booking_id = %id,
                        kind = %kind,
                        item_id = %item_id,
                        "Cancelled booking for a listing that no longer exists"
                    );
                }
            }
            None => self.uow.bookings().mark_cancelled(id).await?,
        }

        tracing::info!(
            booking_id = %id,
            user_id = %actor.id,
            kind = %booking.kind,
            "Booking cancelled"
        );

        Ok(Booking {
            status: BookingStatus::Cancelled,
            updated_at: Utc::now(),
            ..booking
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::repositories::entities::{booking, bus, hotel};
    use crate::infra::Persistence;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn bus_model(seats_available: i32) -> bus::Model {
        let now = Utc::now();
        bus::Model {
            id: Uuid::new_v4(),
            name: "VRL Travels".to_string(),
            origin: "Mumbai".to_string(),
            destination: "Delhi".to_string(),
            travel_date: chrono::NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            departure_time: "08:00 AM".to_string(),
            arrival_time: "10:00 PM".to_string(),
            price: 2500.0,
            seats_available,
            created_at: now,
            updated_at: now,
        }
    }

    fn hotel_model() -> hotel::Model {
        let now = Utc::now();
        hotel::Model {
            id: Uuid::new_v4(),
            name: "Taj Palace".to_string(),
            city: "Mumbai".to_string(),
            address: None,
            description: None,
            price_per_night: 15000.0,
            rating: 5.0,
            image: None,
            amenities: json!(["Pool"]),
            rooms_available: 10,
            featured: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn booking_model(
        user_id: Uuid,
        kind: BookingKind,
        item_id: Uuid,
        quantity: i32,
        total: f64,
    ) -> booking::Model {
        let now = Utc::now();
        booking::Model {
            id: Uuid::new_v4(),
            user_id,
            kind: kind.to_string(),
            item_id,
            quantity,
            booking_date: now,
            total_amount: total,
            status: BookingStatus::Confirmed.to_string(),
            details: json!({}),
            created_at: now,
            updated_at: now,
        }
    }

    fn actor(id: Uuid) -> Actor {
        Actor::new(id, UserRole::User)
    }

    #[tokio::test]
    async fn test_book_bus_reserves_seats_and_records_booking() {
        let user_id = Uuid::new_v4();
        let bus = bus_model(30);
        let stored = booking_model(user_id, BookingKind::Bus, bus.id, 3, 7500.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bus.clone()]])
            .append_exec_results([exec(1)])
            .append_query_results([vec![stored]])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let booking = service
            .book_bus(actor(user_id), BusBookingRequest { bus_id: bus.id, seats: 3 })
            .await
            .unwrap();

        assert_eq!(booking.kind, BookingKind::Bus);
        assert_eq!(booking.item_id, bus.id);
        assert_eq!(booking.quantity, 3);
        assert_eq!(booking.total_amount, 7500.0);
    }

    #[tokio::test]
    async fn test_book_bus_rejects_when_seats_run_out() {
        let bus = bus_model(1);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bus.clone()]])
            .append_exec_results([exec(0)])
            .append_query_results([vec![bus.clone()]])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let result = service
            .book_bus(actor(Uuid::new_v4()), BusBookingRequest { bus_id: bus.id, seats: 2 })
            .await;

        match result {
            Err(AppError::InsufficientInventory(msg)) => assert_eq!(msg, "Not enough seats available"),
            other => panic!("expected InsufficientInventory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_book_bus_deleted_before_reserve_is_not_found() {
        let bus = bus_model(30);

        // Found on lookup, gone by the time the seats are taken
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bus.clone()]])
            .append_exec_results([exec(0)])
            .append_query_results([Vec::<bus::Model>::new()])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let result = service
            .book_bus(actor(Uuid::new_v4()), BusBookingRequest { bus_id: bus.id, seats: 2 })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_book_unknown_bus_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<bus::Model>::new()])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let result = service
            .book_bus(actor(Uuid::new_v4()), BusBookingRequest { bus_id: Uuid::new_v4(), seats: 1 })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_book_hotel_holds_one_room_for_the_stay() {
        let user_id = Uuid::new_v4();
        let hotel = hotel_model();
        let stored = booking_model(user_id, BookingKind::Hotel, hotel.id, 1, 45000.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![hotel.clone()]])
            .append_exec_results([exec(1)])
            .append_query_results([vec![stored]])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let request = HotelBookingRequest {
            hotel_id: hotel.id,
            nights: 3,
            check_in: None,
            check_out: None,
        };
        let booking = service.book_hotel(actor(user_id), request).await.unwrap();

        assert_eq!(booking.quantity, ROOMS_PER_HOTEL_BOOKING);
        assert_eq!(booking.total_amount, 45000.0);
    }

    #[tokio::test]
    async fn test_book_hotel_validates_stay_before_lookup() {
        // No query results queued: the request must fail before touching the database
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let check_in = chrono::NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let request = HotelBookingRequest {
            hotel_id: Uuid::new_v4(),
            nights: 2,
            check_in: Some(check_in),
            check_out: Some(check_in),
        };

        let result = service.book_hotel(actor(Uuid::new_v4()), request).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_cancel_restores_seats() {
        let user_id = Uuid::new_v4();
        let stored = booking_model(user_id, BookingKind::Bus, Uuid::new_v4(), 2, 5000.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .append_exec_results([exec(1), exec(1)])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let cancelled = service.cancel(actor(user_id), stored.id).await.unwrap();

        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(cancelled.id, stored.id);
    }

    #[tokio::test]
    async fn test_concurrent_cancel_loses_the_race() {
        let user_id = Uuid::new_v4();
        let stored = booking_model(user_id, BookingKind::Flight, Uuid::new_v4(), 1, 5200.0);

        // The row still reads Confirmed, but the conditional update matches nothing
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .append_exec_results([exec(0)])
            .into_connection();
        let service = BookingManager::new(Arc::new(Persistence::new(db)));

        let result = service.cancel(actor(user_id), stored.id).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
