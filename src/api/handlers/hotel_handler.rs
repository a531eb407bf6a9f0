//! Hotel handlers.

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
    BookingReceipt, CitySearch, Hotel, HotelBookingRequest, HotelChanges, HotelQuery, NewHotel,
};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hotels))
        .route("/search", get(search_hotels))
        .route("/:id", get(get_hotel))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_hotel))
        .route("/book", post(book_hotel))
        .route("/:id", put(update_hotel).delete(delete_hotel))
}

/// List hotels, featured first
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = "Hotels",
    params(HotelQuery),
    responses(
        (status = 200, description = "Matching hotels", body = Vec<Hotel>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<HotelQuery>,
) -> AppResult<Json<Vec<Hotel>>> {
    Ok(Json(state.catalog_service.list_hotels(query).await?))
}

/// Hotels in a city
#[utoipa::path(
    get,
    path = "/api/hotels/search",
    tag = "Hotels",
    params(CitySearch),
    responses(
        (status = 200, description = "Hotels in the city", body = Vec<Hotel>),
        (status = 400, description = "City is required")
    )
)]
pub async fn search_hotels(
    State(state): State<AppState>,
    ValidatedQuery(search): ValidatedQuery<CitySearch>,
) -> AppResult<Json<Vec<Hotel>>> {
    Ok(Json(state.catalog_service.search_hotels(search).await?))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = "Hotels",
    params(("id" = Uuid, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Hotel>> {
    Ok(Json(state.catalog_service.get_hotel(id).await?))
}

/// Book a room for a number of nights
#[utoipa::path(
    post,
    path = "/api/hotels/book",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = HotelBookingRequest,
    responses(
        (status = 201, description = "Room booked", body = BookingReceipt),
        (status = 400, description = "Invalid stay"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Hotel not found"),
        (status = 409, description = "No rooms available")
    )
)]
pub async fn book_hotel(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<HotelBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    let booking = state
        .booking_service
        .book_hotel(current_user.actor(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingReceipt::new(booking))))
}

#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = NewHotel,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_hotel(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewHotel>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    require_admin(&current_user)?;
    let hotel = state.catalog_service.create_hotel(payload).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

#[utoipa::path(
    put,
    path = "/api/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Hotel ID")),
    request_body = HotelChanges,
    responses(
        (status = 200, description = "Hotel updated", body = Hotel),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn update_hotel(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<HotelChanges>,
) -> AppResult<Json<Hotel>> {
    require_admin(&current_user)?;
    Ok(Json(state.catalog_service.update_hotel(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Hotel ID")),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn delete_hotel(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.catalog_service.delete_hotel(id).await?;
    Ok(NoContent)
}
