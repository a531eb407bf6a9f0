//! Authentication service - registration, login and token verification.
//!
//! Password hashing lives in the domain `Password` value object; this
//! service only orchestrates it and issues JWTs.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{NewAccount, Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 604800)]
    pub expires_in: i64,
}

/// A freshly issued token together with the account it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: TokenResponse,
    pub user: User,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a `user` account and sign it in
    async fn register(&self, account: NewAccount) -> AppResult<AuthSession>;

    async fn login(&self, email: String, password: String) -> AppResult<AuthSession>;

    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, account: NewAccount) -> AppResult<AuthSession> {
        let email = normalize_email(&account.email);

        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&account.password)?.into_string();
        let user = self
            .uow
            .users()
            .create(account.name.trim().to_string(), email, password_hash, UserRole::User)
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        let token = generate_token(&user, &self.config)?;
        Ok(AuthSession { token, user })
    }

    async fn login(&self, email: String, password: String) -> AppResult<AuthSession> {
        let email = normalize_email(&email);
        let found = self.uow.users().find_by_email(&email).await?;

        // Verify against a decoy hash for unknown emails so both paths cost the same
        let stored = match &found {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::decoy(),
        };
        let password_valid = stored.verify(&password);

        match found {
            Some(user) if password_valid => {
                let token = generate_token(&user, &self.config)?;
                Ok(AuthSession { token, user })
            }
            _ => {
                tracing::warn!(email = %email, "Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::with_secret("a-test-secret-that-is-at-least-32-chars")
    }

    fn user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Admin,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_token_carries_identity_and_lifetime() {
        let config = config();
        let user = user();

        let token = generate_token(&user, &config).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, config.jwt_expiration_hours * SECONDS_PER_HOUR);

        let claims = decode::<Claims>(
            &token.access_token,
            &DecodingKey::from_secret(config.jwt_secret_bytes()),
            &Validation::default(),
        )
        .unwrap()
        .claims;
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Asha@Example.COM "), "asha@example.com");
    }
}
