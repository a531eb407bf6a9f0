//! Authentication handlers.
//!
//! Register and login both answer with the token in the body and set it as
//! an HttpOnly cookie, so browser and API clients can use either.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{load_user, CurrentUser};
use crate::api::AppState;
use crate::config::{Config, AUTH_COOKIE_NAME};
use crate::domain::{NewAccount, UserResponse};
use crate::errors::AppResult;
use crate::services::{AuthSession, TokenResponse};
use crate::types::MessageResponse;

/// User registration request
///
/// Any role or admin flag in the body is ignored; new accounts are always `user`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Asha Rao")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Token plus the signed-in user
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub token: TokenResponse,
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: UserResponse::from(session.user),
        }
    }
}

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes behind the auth middleware
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
}

fn session_cookie(token: &str, config: &Config) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token.to_string()))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered and signed in", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    let session = state
        .auth_service
        .register(NewAccount {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let jar = jar.add(session_cookie(&session.token.access_token, &state.config));

    Ok((StatusCode::CREATED, jar, Json(AuthResponse::from(session))))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    let session = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    let jar = jar.add(session_cookie(&session.token.access_token, &state.config));

    Ok((StatusCode::OK, jar, Json(AuthResponse::from(session))))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn logout(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    // The next request reloads the account from the database
    if let Err(e) = state.cache.invalidate_user(&current_user.id).await {
        tracing::warn!(user_id = %current_user.id, error = %e, "User cache invalidation failed");
    }
    tracing::debug!(user_id = %current_user.id, "User logged out");
    let jar = jar.remove(Cookie::build(AUTH_COOKIE_NAME).path("/"));
    (jar, Json(MessageResponse::new("Logged out successfully")))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = load_user(&state, current_user.id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_ignores_admin_flag() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{"name":"Eve","email":"eve@example.com","password":"password123","isAdmin":true}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.email, "eve@example.com");
    }

    #[test]
    fn test_short_password_rejected() {
        let payload = RegisterRequest {
            name: "Eve".to_string(),
            email: "eve@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_cookie_is_http_only() {
        let config = Config::with_secret("x".repeat(32));
        let cookie = session_cookie("abc", &config);
        assert_eq!(cookie.name(), AUTH_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
