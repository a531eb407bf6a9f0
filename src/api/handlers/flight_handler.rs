//! Flight handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{
    BookingReceipt, Flight, FlightBookingRequest, FlightChanges, NewFlight, RouteQuery,
};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_flights))
        .route("/:id", get(get_flight))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_flight))
        .route("/book", post(book_flight))
        .route("/:id", put(update_flight).delete(delete_flight))
}

/// Search flights by route and day
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = "Flights",
    params(RouteQuery),
    responses(
        (status = 200, description = "Matching flights, earliest first", body = Vec<Flight>)
    )
)]
pub async fn list_flights(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RouteQuery>,
) -> AppResult<Json<Vec<Flight>>> {
    Ok(Json(state.catalog_service.list_flights(query).await?))
}

#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = "Flights",
    params(("id" = Uuid, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Flight>> {
    Ok(Json(state.catalog_service.get_flight(id).await?))
}

/// Book seats on a flight
#[utoipa::path(
    post,
    path = "/api/flights/book",
    tag = "Flights",
    security(("bearer_auth" = [])),
    request_body = FlightBookingRequest,
    responses(
        (status = 201, description = "Seats booked", body = BookingReceipt),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Flight not found"),
        (status = 409, description = "Not enough seats available")
    )
)]
pub async fn book_flight(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FlightBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    let booking = state
        .booking_service
        .book_flight(current_user.actor(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingReceipt::new(booking))))
}

#[utoipa::path(
    post,
    path = "/api/flights",
    tag = "Flights",
    security(("bearer_auth" = [])),
    request_body = NewFlight,
    responses(
        (status = 201, description = "Flight created", body = Flight),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_flight(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewFlight>,
) -> AppResult<(StatusCode, Json<Flight>)> {
    require_admin(&current_user)?;
    let flight = state.catalog_service.create_flight(payload).await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = "Flights",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Flight ID")),
    request_body = FlightChanges,
    responses(
        (status = 200, description = "Flight updated", body = Flight),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn update_flight(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<FlightChanges>,
) -> AppResult<Json<Flight>> {
    require_admin(&current_user)?;
    Ok(Json(state.catalog_service.update_flight(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = "Flights",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Flight ID")),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Flight not found")
    )
)]
pub async fn delete_flight(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.catalog_service.delete_flight(id).await?;
    Ok(NoContent)
}
