//! Booking handlers: reading and cancelling existing bookings.
//!
//! New bookings are made through each listing's `/book` route.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use uuid::Uuid;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::Booking;
use crate::errors::AppResult;

/// Every booking route requires a token.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(my_bookings))
        .route("/user/:id", get(user_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/cancel", put(cancel_booking))
}

/// Bookings of the current user, newest first
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<Booking>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn my_bookings(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state
        .booking_service
        .list_for_user(current_user.actor(), current_user.id)
        .await?;
    Ok(Json(bookings))
}

/// Bookings of a given user (that user or admin)
#[utoipa::path(
    get,
    path = "/api/bookings/user/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's bookings", body = Vec<Booking>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Can only view own bookings unless admin")
    )
)]
pub async fn user_bookings(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state
        .booking_service
        .list_for_user(current_user.actor(), id)
        .await?;
    Ok(Json(bookings))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the owner"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_service
        .get_booking(current_user.actor(), id)
        .await?;
    Ok(Json(booking))
}

/// Cancel a booking and hand back its seats or room
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/cancel",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 400, description = "Booking is already cancelled"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the owner"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn cancel_booking(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_service
        .cancel(current_user.actor(), id)
        .await?;
    Ok(Json(booking))
}
