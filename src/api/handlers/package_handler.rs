//! Holiday package handlers.

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
    BookingReceipt, NewPackage, Package, PackageBookingRequest, PackageChanges, PackageQuery,
};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages))
        .route("/:id", get(get_package))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_package))
        .route("/book", post(book_package))
        .route("/:id", put(update_package).delete(delete_package))
}

/// List packages, featured first then cheapest
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = "Packages",
    params(PackageQuery),
    responses(
        (status = 200, description = "Matching packages", body = Vec<Package>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_packages(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PackageQuery>,
) -> AppResult<Json<Vec<Package>>> {
    Ok(Json(state.catalog_service.list_packages(query).await?))
}

#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package details", body = Package),
        (status = 404, description = "Package not found")
    )
)]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Package>> {
    Ok(Json(state.catalog_service.get_package(id).await?))
}

/// Book a package
#[utoipa::path(
    post,
    path = "/api/packages/book",
    tag = "Packages",
    security(("bearer_auth" = [])),
    request_body = PackageBookingRequest,
    responses(
        (status = 201, description = "Package booked", body = BookingReceipt),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Package not found")
    )
)]
pub async fn book_package(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PackageBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    let booking = state
        .booking_service
        .book_package(current_user.actor(), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(BookingReceipt::new(booking))))
}

#[utoipa::path(
    post,
    path = "/api/packages",
    tag = "Packages",
    security(("bearer_auth" = [])),
    request_body = NewPackage,
    responses(
        (status = 201, description = "Package created", body = Package),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_package(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewPackage>,
) -> AppResult<(StatusCode, Json<Package>)> {
    require_admin(&current_user)?;
    let package = state.catalog_service.create_package(payload).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

#[utoipa::path(
    put,
    path = "/api/packages/{id}",
    tag = "Packages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Package ID")),
    request_body = PackageChanges,
    responses(
        (status = 200, description = "Package updated", body = Package),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Package not found")
    )
)]
pub async fn update_package(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<PackageChanges>,
) -> AppResult<Json<Package>> {
    require_admin(&current_user)?;
    Ok(Json(state.catalog_service.update_package(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/packages/{id}",
    tag = "Packages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 204, description = "Package deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Package not found")
    )
)]
pub async fn delete_package(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.catalog_service.delete_package(id).await?;
    Ok(NoContent)
}
