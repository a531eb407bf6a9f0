//! Booking service tests over mocked repositories.
//!
//! The transactional paths (seats and rooms) are covered against SeaORM's
//! mock connection inside the crate; these tests cover access rules and
//! the bookings that never touch inventory.

mod common;

use std::sync::Arc;

use mockall::predicate::eq;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::{booking, package, TestUnitOfWork};
use voyago::domain::{
    Actor, BookingKind, BookingStatus, CabBookingRequest, PackageBookingRequest, UserRole,
};
use voyago::errors::AppError;
use voyago::infra::{MockBookingRepository, MockPackageRepository};
use voyago::services::{BookingManager, BookingService};

fn service(uow: TestUnitOfWork) -> BookingManager<TestUnitOfWork> {
    BookingManager::new(Arc::new(uow))
}

#[tokio::test]
async fn test_cancel_someone_elses_booking_is_forbidden() {
    let existing = booking(Uuid::new_v4(), BookingKind::Bus, BookingStatus::Confirmed);
    let id = existing.id;

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(existing.clone())));
    bookings.expect_mark_cancelled().never();

    let stranger = Actor::new(Uuid::new_v4(), UserRole::User);
    let result = service(TestUnitOfWork::with_bookings(bookings))
        .cancel(stranger, id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden)));
}

#[tokio::test]
async fn test_admin_cannot_cancel_on_behalf_of_user() {
    let existing = booking(Uuid::new_v4(), BookingKind::Hotel, BookingStatus::Confirmed);
    let id = existing.id;

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));

    let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
    let result = service(TestUnitOfWork::with_bookings(bookings))
        .cancel(admin, id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden)));
}

#[tokio::test]
async fn test_cancel_twice_is_bad_request() {
    let owner = Uuid::new_v4();
    let existing = booking(owner, BookingKind::Flight, BookingStatus::Cancelled);
    let id = existing.id;

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));

    let result = service(TestUnitOfWork::with_bookings(bookings))
        .cancel(Actor::new(owner, UserRole::User), id)
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Booking is already cancelled"),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_unknown_booking_is_not_found() {
    let mut bookings = MockBookingRepository::new();
    bookings.expect_find_by_id().returning(|_| Ok(None));

    let result = service(TestUnitOfWork::with_bookings(bookings))
        .cancel(Actor::new(Uuid::new_v4(), UserRole::User), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_cancel_package_skips_inventory_transaction() {
    let owner = Uuid::new_v4();
    let existing = booking(owner, BookingKind::Package, BookingStatus::Confirmed);
    let id = existing.id;

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    bookings
        .expect_mark_cancelled()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(()));

    // TestUnitOfWork refuses transactions, so success proves none was opened
    let cancelled = assert_ok!(
        service(TestUnitOfWork::with_bookings(bookings))
            .cancel(Actor::new(owner, UserRole::User), id)
            .await
    );

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.id, id);
}

#[tokio::test]
async fn test_book_package_charges_package_price() {
    let listing = package(25000.0);
    let package_id = listing.id;
    let user_id = Uuid::new_v4();

    let mut packages = MockPackageRepository::new();
    packages
        .expect_find_by_id()
        .with(eq(package_id))
        .returning(move |_| Ok(Some(listing.clone())));

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_create()
        .withf(move |b| {
            b.kind == BookingKind::Package
                && b.item_id == package_id
                && b.user_id == user_id
                && b.quantity == 1
                && b.total_amount == 25000.0
                && b.details["destination"] == "Kerala Backwaters"
        })
        .times(1)
        .returning(move |b| {
            let mut created = booking(b.user_id, b.kind, BookingStatus::Confirmed);
            created.item_id = b.item_id;
            created.total_amount = b.total_amount;
            Ok(created)
        });

    let uow = TestUnitOfWork {
        packages: Arc::new(packages),
        bookings: Arc::new(bookings),
        ..Default::default()
    };

    let created = assert_ok!(
        service(uow)
            .book_package(
                Actor::new(user_id, UserRole::User),
                PackageBookingRequest { package_id },
            )
            .await
    );

    assert_eq!(created.total_amount, 25000.0);
    assert_eq!(created.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_book_unknown_package_is_not_found() {
    let mut packages = MockPackageRepository::new();
    packages.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        packages: Arc::new(packages),
        ..Default::default()
    };

    let result = service(uow)
        .book_package(
            Actor::new(Uuid::new_v4(), UserRole::User),
            PackageBookingRequest {
                package_id: Uuid::new_v4(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_book_cab_rejects_negative_distance() {
    // No repository expectations: validation fails before any lookup
    let result = service(TestUnitOfWork::default())
        .book_cab(
            Actor::new(Uuid::new_v4(), UserRole::User),
            CabBookingRequest {
                cab_id: Uuid::new_v4(),
                origin: "Airport".to_string(),
                destination: "Old Town".to_string(),
                distance_km: -1.0,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_list_other_users_bookings_requires_admin() {
    let owner = Uuid::new_v4();

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_list_for_user()
        .with(eq(owner))
        .times(1)
        .returning(move |id| {
            Ok(vec![
                booking(id, BookingKind::Bus, BookingStatus::Confirmed),
                booking(id, BookingKind::Cab, BookingStatus::Cancelled),
            ])
        });

    let service = service(TestUnitOfWork::with_bookings(bookings));

    let stranger = Actor::new(Uuid::new_v4(), UserRole::User);
    assert!(matches!(
        service.list_for_user(stranger, owner).await,
        Err(AppError::Forbidden)
    ));

    let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
    let listed = assert_ok!(service.list_for_user(admin, owner).await);
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_get_booking_owner_or_admin() {
    let owner = Uuid::new_v4();
    let existing = booking(owner, BookingKind::Hotel, BookingStatus::Confirmed);
    let id = existing.id;

    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));

    let service = service(TestUnitOfWork::with_bookings(bookings));

    assert_ok!(service.get_booking(Actor::new(owner, UserRole::User), id).await);
    assert_ok!(
        service
            .get_booking(Actor::new(Uuid::new_v4(), UserRole::Admin), id)
            .await
    );
    assert_err!(
        service
            .get_booking(Actor::new(Uuid::new_v4(), UserRole::User), id)
            .await
    );
}
