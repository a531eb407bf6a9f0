//! Trip plan handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{NewTrip, Trip, TripChanges};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, ListResponse};

/// Every trip route requires a token.
pub fn trip_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", get(get_trip).put(update_trip).delete(delete_trip))
}

#[utoipa::path(
    get,
    path = "/api/trips",
    tag = "Trips",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's trips as {success, count, data}", body = Vec<Trip>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_trips(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Trip>>> {
    let trips = state.trip_service.list_trips(current_user.actor()).await?;
    Ok(Json(ListResponse::new(trips)))
}

#[utoipa::path(
    post,
    path = "/api/trips",
    tag = "Trips",
    security(("bearer_auth" = [])),
    request_body = NewTrip,
    responses(
        (status = 201, description = "Trip created", body = Trip),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_trip(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewTrip>,
) -> AppResult<Created<Trip>> {
    let trip = state
        .trip_service
        .create_trip(current_user.actor(), payload)
        .await?;
    Ok(Created(trip))
}

#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = "Trips",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip details", body = Trip),
        (status = 403, description = "Forbidden - Not the owner"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_trip(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let trip = state.trip_service.get_trip(current_user.actor(), id).await?;
    Ok(Json(ApiResponse::success(trip)))
}

#[utoipa::path(
    put,
    path = "/api/trips/{id}",
    tag = "Trips",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = TripChanges,
    responses(
        (status = 200, description = "Trip updated", body = Trip),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Not the owner"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn update_trip(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<TripChanges>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let trip = state
        .trip_service
        .update_trip(current_user.actor(), id, payload)
        .await?;
    Ok(Json(ApiResponse::success(trip)))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{id}",
    tag = "Trips",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip deleted"),
        (status = 403, description = "Forbidden - Not the owner"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn delete_trip(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .trip_service
        .delete_trip(current_user.actor(), id)
        .await?;
    Ok(Json(ApiResponse::message("Trip deleted")))
}
