//! Bus handlers.

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
use crate::domain::{Bus, BusBookingRequest, BusChanges, BookingReceipt, NewBus, RouteQuery};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_buses))
        .route("/:id", get(get_bus))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bus))
        .route("/book", post(book_bus))
        .route("/:id", put(update_bus).delete(delete_bus))
}

/// Search buses by route and day
#[utoipa::path(
    get,
    path = "/api/bus",
    tag = "Buses",
    params(RouteQuery),
    responses(
        (status = 200, description = "Matching buses, earliest first", body = Vec<Bus>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_buses(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RouteQuery>,
) -> AppResult<Json<Vec<Bus>>> {
    Ok(Json(state.catalog_service.list_buses(query).await?))
}

#[utoipa::path(
    get,
    path = "/api/bus/{id}",
    tag = "Buses",
    params(("id" = Uuid, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Bus details", body = Bus),
        (status = 404, description = "Bus not found")
    )
)]
pub async fn get_bus(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<Json<Bus>> {
    Ok(Json(state.catalog_service.get_bus(id).await?))
}

/// Book seats on a bus
#[utoipa::path(
    post,
    path = "/api/bus/book",
    tag = "Buses",
    security(("bearer_auth" = [])),
    request_body = BusBookingRequest,
    responses(
        (status = 201, description = "Seats booked", body = BookingReceipt),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Bus not found"),
        (status = 409, description = "Not enough seats available")
    )
)]
pub async fn book_bus(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BusBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    let booking = state
        .booking_service
        .book_bus(current_user.actor(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingReceipt::new(booking))))
}

/// Add a bus (admin only)
#[utoipa::path(
    post,
    path = "/api/bus",
    tag = "Buses",
    security(("bearer_auth" = [])),
    request_body = NewBus,
    responses(
        (status = 201, description = "Bus created", body = Bus),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_bus(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewBus>,
) -> AppResult<(StatusCode, Json<Bus>)> {
    require_admin(&current_user)?;
    let bus = state.catalog_service.create_bus(payload).await?;
    Ok((StatusCode::CREATED, Json(bus)))
}

#[utoipa::path(
    put,
    path = "/api/bus/{id}",
    tag = "Buses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bus ID")),
    request_body = BusChanges,
    responses(
        (status = 200, description = "Bus updated", body = Bus),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Bus not found")
    )
)]
pub async fn update_bus(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<BusChanges>,
) -> AppResult<Json<Bus>> {
    require_admin(&current_user)?;
    Ok(Json(state.catalog_service.update_bus(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/bus/{id}",
    tag = "Buses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bus ID")),
    responses(
        (status = 204, description = "Bus deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Bus not found")
    )
)]
pub async fn delete_bus(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.catalog_service.delete_bus(id).await?;
    Ok(NoContent)
}
