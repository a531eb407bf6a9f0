//! Authentication and user service tests.

mod common;

use std::sync::Arc;

use mockall::predicate::{eq, function};
use uuid::Uuid;

use common::{user, TestUnitOfWork};
use voyago::config::Config;
use voyago::domain::{NewAccount, Password, UserRole};
use voyago::errors::AppError;
use voyago::infra::MockUserRepository;
use voyago::services::{AuthService, Authenticator, UserManager, UserService};

fn config() -> Config {
    Config::with_secret("test-secret-key-for-testing-only-32chars")
}

fn account(email: &str) -> NewAccount {
    NewAccount {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_plain_user_with_token() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(function(|email: &str| email == "asha@example.com"))
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|name, email, hash, role| {
            name == "Asha Rao"
                && email == "asha@example.com"
                && hash.starts_with("$argon2")
                && *role == UserRole::User
        })
        .times(1)
        .returning(|_, _, _, role| Ok(user(Uuid::new_v4(), role)));

    let auth = Authenticator::new(Arc::new(TestUnitOfWork::with_users(repo)), config());
    let session = auth.register(account("  Asha@Example.com ")).await.unwrap();

    assert_eq!(session.user.role, UserRole::User);
    assert_eq!(session.token.token_type, "Bearer");

    let claims = auth.verify_token(&session.token.access_token).unwrap();
    assert_eq!(claims.sub, session.user.id);
    assert_eq!(claims.role, "user");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(|_| Ok(Some(user(Uuid::new_v4(), UserRole::User))));
    repo.expect_create().never();

    let auth = Authenticator::new(Arc::new(TestUnitOfWork::with_users(repo)), config());
    let result = auth.register(account("asha@example.com")).await;

    match result {
        Err(e @ AppError::Conflict(_)) => assert_eq!(e.to_string(), "User already exists"),
        other => panic!("expected conflict, got {:?}", other.map(|s| s.user.id)),
    }
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let id = Uuid::new_v4();
    let hash = Password::new("password123").unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(move |_| {
        let mut stored = user(id, UserRole::Admin);
        stored.password_hash = hash.clone();
        Ok(Some(stored))
    });

    let auth = Authenticator::new(Arc::new(TestUnitOfWork::with_users(repo)), config());
    let session = auth
        .login("asha@example.com".to_string(), "password123".to_string())
        .await
        .unwrap();

    assert_eq!(session.user.id, id);
    assert_eq!(auth.verify_token(&session.token.access_token).unwrap().role, "admin");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let hash = Password::new("password123").unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(function(|email: &str| email == "asha@example.com"))
        .returning(move |_| {
            let mut stored = user(Uuid::new_v4(), UserRole::User);
            stored.password_hash = hash.clone();
            Ok(Some(stored))
        });
    repo.expect_find_by_email().returning(|_| Ok(None));

    let auth = Authenticator::new(Arc::new(TestUnitOfWork::with_users(repo)), config());

    let wrong_password = auth
        .login("asha@example.com".to_string(), "wrong-password".to_string())
        .await;
    let unknown_email = auth
        .login("nobody@example.com".to_string(), "password123".to_string())
        .await;

    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_verify_rejects_token_signed_with_other_secret() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .returning(|_, _, _, role| Ok(user(Uuid::new_v4(), role)));

    let issuer = Authenticator::new(Arc::new(TestUnitOfWork::with_users(repo)), config());
    let session = issuer.register(account("asha@example.com")).await.unwrap();

    let other = Authenticator::new(
        Arc::new(TestUnitOfWork::default()),
        Config::with_secret("another-secret-key-for-testing-32chars"),
    );
    assert!(other.verify_token(&session.token.access_token).is_err());
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(move |id| Ok(Some(user(id, UserRole::User))));

    let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
    let found = service.get_user(user_id).await.unwrap();

    assert_eq!(found.id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
    let result = service.get_user(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}
