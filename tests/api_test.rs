//! HTTP-layer tests that need no database or Redis.
//!
//! Extractors and error responses are exercised through small routers
//! driven with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower::ServiceExt;

use voyago::api::extractors::{ValidatedJson, ValidatedQuery};
use voyago::api::middleware::extract_token;
use voyago::domain::{BusBookingRequest, CitySearch, HotelBookingRequest, HotelQuery};
use voyago::errors::AppError;
use voyago::types::{ApiResponse, Created, ListResponse, NoContent};

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_router() -> Router {
    Router::new()
        .route(
            "/book",
            post(|ValidatedJson(req): ValidatedJson<BusBookingRequest>| async move {
                Json(serde_json::json!({ "seats": req.seats }))
            }),
        )
        .route(
            "/hotels",
            get(|ValidatedQuery(q): ValidatedQuery<HotelQuery>| async move {
                Json(serde_json::json!({ "city": q.city }))
            }),
        )
        .route(
            "/hotels/book",
            post(|ValidatedJson(req): ValidatedJson<HotelBookingRequest>| async move {
                Json(serde_json::json!({ "nights": req.nights }))
            }),
        )
        .route(
            "/search",
            get(|ValidatedQuery(q): ValidatedQuery<CitySearch>| async move { q.city }),
        )
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Extractors
// =============================================================================

#[tokio::test]
async fn test_valid_booking_body_passes() {
    let body = format!(r#"{{"bus_id":"{}","seats":2}}"#, uuid::Uuid::new_v4());
    let response = test_router().oneshot(post_json("/book", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["seats"], 2);
}

#[tokio::test]
async fn test_zero_seats_rejected_with_validation_error() {
    let body = format!(r#"{{"bus_id":"{}","seats":0}}"#, uuid::Uuid::new_v4());
    let response = test_router().oneshot(post_json("/book", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "At least one seat must be booked");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let response = test_router()
        .oneshot(post_json("/book", r#"{"bus_id": 42"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_stay_rejected_before_booking() {
    let body = format!(
        r#"{{"hotel_id":"{}","nights":2147483647}}"#,
        uuid::Uuid::new_v4()
    );
    let response = test_router()
        .oneshot(post_json("/hotels/book", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Nights must be between 1 and 365");
}

#[tokio::test]
async fn test_query_filters_validated() {
    let ok = test_router()
        .oneshot(get_request("/hotels?city=Goa&rating=4"))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(json_body(ok).await["city"], "Goa");

    let bad = test_router()
        .oneshot(get_request("/hotels?rating=9"))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_city_search_requires_city() {
    let response = test_router().oneshot(get_request("/search")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"]["message"], "City is required");
}

// =============================================================================
// Error responses
// =============================================================================

#[tokio::test]
async fn test_error_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
        (AppError::Forbidden, StatusCode::FORBIDDEN, "FORBIDDEN"),
        (AppError::NotFound, StatusCode::NOT_FOUND, "NOT_FOUND"),
        (AppError::conflict("User"), StatusCode::CONFLICT, "CONFLICT"),
        (
            AppError::insufficient("Not enough seats available"),
            StatusCode::CONFLICT,
            "INSUFFICIENT_INVENTORY",
        ),
        (
            AppError::bad_request("Booking is already cancelled"),
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
        ),
    ];

    for (error, status, code) in cases {
        assert_eq!(error.status(), status);
        assert_eq!(error.code(), code);
    }
}

#[tokio::test]
async fn test_sold_out_message_reaches_client() {
    let response = AppError::insufficient("No rooms available").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error"]["message"], "No rooms available");
}

#[tokio::test]
async fn test_internal_details_hidden() {
    let response = AppError::internal("connection pool exhausted at 10.0.0.3").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("10.0.0.3"));
}

// =============================================================================
// Response envelopes
// =============================================================================

#[tokio::test]
async fn test_list_response_shape() {
    let response = Json(ListResponse::new(vec!["Goa", "Pune"])).into_response();
    let json = json_body(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0], "Goa");
}

#[tokio::test]
async fn test_created_wraps_in_api_response() {
    let response = Created("trip").into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "trip");
}

#[tokio::test]
async fn test_no_content() {
    assert_eq!(NoContent.into_response().status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_api_response_message_only() {
    let response: ApiResponse<()> = ApiResponse::message("Trip deleted");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.as_deref(), Some("Trip deleted"));
}

// =============================================================================
// Token extraction
// =============================================================================

#[tokio::test]
async fn test_token_from_cookie_or_bearer() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("token=cookie-token"));
    assert_eq!(extract_token(&headers).as_deref(), Some("cookie-token"));

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer header-token"),
    );
    assert_eq!(extract_token(&headers).as_deref(), Some("header-token"));

    assert!(extract_token(&HeaderMap::new()).is_none());
}
