//! Trip service tests.

mod common;

use std::sync::Arc;

use mockall::predicate::eq;
use tokio_test::assert_ok;
use uuid::Uuid;

use common::{day, trip, TestUnitOfWork};
use voyago::domain::{Actor, NewTrip, TripChanges, UserRole};
use voyago::errors::AppError;
use voyago::infra::MockTripRepository;
use voyago::services::{TripPlanner, TripService};

#[tokio::test]
async fn test_create_rejects_end_before_start() {
    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::default()));

    let result = planner
        .create_trip(
            Actor::new(Uuid::new_v4(), UserRole::User),
            NewTrip {
                destination: "Pune".to_string(),
                start_date: day(12, 5),
                end_date: day(12, 3),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_create_assigns_caller_as_owner() {
    let owner = Uuid::new_v4();

    let mut trips = MockTripRepository::new();
    trips
        .expect_create()
        .withf(move |user_id, new| *user_id == owner && new.destination == "Goa")
        .times(1)
        .returning(|user_id, _| Ok(trip(user_id)));

    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::with_trips(trips)));
    let created = assert_ok!(
        planner
            .create_trip(
                Actor::new(owner, UserRole::User),
                NewTrip {
                    destination: "Goa".to_string(),
                    start_date: day(11, 10),
                    end_date: day(11, 14),
                },
            )
            .await
    );

    assert_eq!(created.user_id, owner);
}

#[tokio::test]
async fn test_other_users_trip_is_forbidden_even_for_admin() {
    let existing = trip(Uuid::new_v4());
    let id = existing.id;

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(existing.clone())));
    trips.expect_delete().never();

    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::with_trips(trips)));

    let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
    assert!(matches!(
        planner.get_trip(admin, id).await,
        Err(AppError::Forbidden)
    ));

    let stranger = Actor::new(Uuid::new_v4(), UserRole::User);
    assert!(matches!(
        planner.delete_trip(stranger, id).await,
        Err(AppError::Forbidden)
    ));
}

#[tokio::test]
async fn test_unknown_trip_is_not_found() {
    let mut trips = MockTripRepository::new();
    trips.expect_find_by_id().returning(|_| Ok(None));

    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::with_trips(trips)));
    let result = planner
        .get_trip(Actor::new(Uuid::new_v4(), UserRole::User), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_checks_dates_against_stored_trip() {
    let owner = Uuid::new_v4();
    let existing = trip(owner);
    let id = existing.id;

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    trips.expect_update().never();

    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::with_trips(trips)));

    // Stored trip starts on 10 Nov; moving only the end before it must fail
    let result = planner
        .update_trip(
            Actor::new(owner, UserRole::User),
            id,
            TripChanges {
                end_date: Some(day(11, 9)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_owner_can_delete() {
    let owner = Uuid::new_v4();
    let existing = trip(owner);
    let id = existing.id;

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    trips
        .expect_delete()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(()));

    let planner = TripPlanner::new(Arc::new(TestUnitOfWork::with_trips(trips)));
    assert_ok!(planner.delete_trip(Actor::new(owner, UserRole::User), id).await);
}
