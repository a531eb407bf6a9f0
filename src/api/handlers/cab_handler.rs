//! Cab handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{
    BookingReceipt, Cab, CabBookingRequest, CabChanges, FareEstimate, FareEstimateRequest, NewCab,
};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cabs))
        .route("/estimate", post(estimate_fare))
        .route("/:id", get(get_cab))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cab))
        .route("/book", post(book_cab))
        .route("/:id", put(update_cab).delete(delete_cab))
}

#[utoipa::path(
    get,
    path = "/api/cabs",
    tag = "Cabs",
    responses(
        (status = 200, description = "Cab providers, cheapest base fare first", body = Vec<Cab>)
    )
)]
pub async fn list_cabs(State(state): State<AppState>) -> AppResult<Json<Vec<Cab>>> {
    Ok(Json(state.catalog_service.list_cabs().await?))
}

#[utoipa::path(
    get,
    path = "/api/cabs/{id}",
    tag = "Cabs",
    params(("id" = Uuid, Path, description = "Cab ID")),
    responses(
        (status = 200, description = "Cab details", body = Cab),
        (status = 404, description = "Cab not found")
    )
)]
pub async fn get_cab(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<Json<Cab>> {
    Ok(Json(state.catalog_service.get_cab(id).await?))
}

/// Estimate a fare without booking
#[utoipa::path(
    post,
    path = "/api/cabs/estimate",
    tag = "Cabs",
    request_body = FareEstimateRequest,
    responses(
        (status = 200, description = "Estimated fare", body = FareEstimate),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cab not found")
    )
)]
pub async fn estimate_fare(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FareEstimateRequest>,
) -> AppResult<Json<FareEstimate>> {
    Ok(Json(state.catalog_service.estimate_fare(payload).await?))
}

/// Book a ride at the estimated fare
#[utoipa::path(
    post,
    path = "/api/cabs/book",
    tag = "Cabs",
    security(("bearer_auth" = [])),
    request_body = CabBookingRequest,
    responses(
        (status = 201, description = "Ride booked", body = BookingReceipt),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Cab not found")
    )
)]
pub async fn book_cab(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CabBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    let booking = state
        .booking_service
        .book_cab(current_user.actor(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingReceipt::new(booking))))
}

#[utoipa::path(
    post,
    path = "/api/cabs",
    tag = "Cabs",
    security(("bearer_auth" = [])),
    request_body = NewCab,
    responses(
        (status = 201, description = "Cab created", body = Cab),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_cab(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewCab>,
) -> AppResult<(StatusCode, Json<Cab>)> {
    require_admin(&current_user)?;
    let cab = state.catalog_service.create_cab(payload).await?;
    Ok((StatusCode::CREATED, Json(cab)))
}

#[utoipa::path(
    put,
    path = "/api/cabs/{id}",
    tag = "Cabs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cab ID")),
    request_body = CabChanges,
    responses(
        (status = 200, description = "Cab updated", body = Cab),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Cab not found")
    )
)]
pub async fn update_cab(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CabChanges>,
) -> AppResult<Json<Cab>> {
    require_admin(&current_user)?;
    Ok(Json(state.catalog_service.update_cab(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cabs/{id}",
    tag = "Cabs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Cab ID")),
    responses(
        (status = 204, description = "Cab deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Cab not found")
    )
)]
pub async fn delete_cab(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.catalog_service.delete_cab(id).await?;
    Ok(NoContent)
}
