//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_REDIS_URL,
    DEFAULT_SEED_ADMIN_EMAIL, DEFAULT_SEED_ADMIN_PASSWORD, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Mark the auth cookie `Secure` (HTTPS only)
    pub cookie_secure: bool,
    pub server_host: String,
    pub server_port: u16,
    pub seed_admin_email: String,
    seed_admin_password: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("redis_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("cookie_secure", &self.cookie_secure)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("seed_admin_email", &self.seed_admin_email)
            .field("seed_admin_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        Self::build(
            jwt_secret,
            |key| env::var(key).ok(),
        )
    }

    /// Build a configuration for tests and tooling without touching the process environment.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self::build(jwt_secret.into(), |_| None)
    }

    fn build(jwt_secret: String, var: impl Fn(&str) -> Option<String>) -> Self {
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            redis_url: var("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            jwt_secret,
            jwt_expiration_hours: var("JWT_EXPIRATION_HOURS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            cookie_secure: var("COOKIE_SECURE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: var("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            seed_admin_email: var("SEED_ADMIN_EMAIL")
                .unwrap_or_else(|| DEFAULT_SEED_ADMIN_EMAIL.to_string()),
            seed_admin_password: var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_SEED_ADMIN_PASSWORD.to_string()),
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Plain-text password for the seeded admin account.
    pub fn seed_admin_password(&self) -> &str {
        &self.seed_admin_password
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::with_secret(SECRET);

        assert_eq!(config.jwt_expiration_hours, 168);
        assert_eq!(config.server_port, 5000);
        assert!(!config.cookie_secure);
        assert_eq!(config.seed_admin_email, "admin@voyago.com");
        assert_eq!(config.seed_admin_password(), "admin123");
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::build(SECRET.to_string(), |key| match key {
            "JWT_EXPIRATION_HOURS" => Some("12".to_string()),
            "COOKIE_SECURE" => Some("TRUE".to_string()),
            "SERVER_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert_eq!(config.jwt_expiration_hours, 12);
        assert!(config.cookie_secure);
        assert_eq!(config.server_port, 5000);
    }

    #[test]
    #[should_panic(expected = "at least 32 characters")]
    fn test_short_secret_rejected() {
        Config::with_secret("too-short");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", Config::with_secret(SECRET));
        assert!(!rendered.contains(SECRET));
        assert!(!rendered.contains("admin123"));
    }
}
