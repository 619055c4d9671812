use chrono::NaiveDate;
use entity::prelude::User as UserEntity;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::{
    model::user::{LoginDto, UserPayloadDto},
    server::{
        model::user::{LoginParams, RegisterUserParams, UserRole},
        service::auth::AuthService,
        state::AdminBootstrap,
    },
};

fn register_params(email: &str, role: UserRole) -> RegisterUserParams {
    RegisterUserParams {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        contact: "0123456789".to_string(),
        email: email.to_string(),
        password: "long enough".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        membership_status: "Active".to_string(),
        role,
    }
}

fn login(email: &str, password: &str) -> LoginParams {
    LoginParams::from_dto(LoginDto {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    })
    .unwrap()
}

fn bootstrap() -> AdminBootstrap {
    AdminBootstrap {
        email: "root@club.test".to_string(),
        password: "bootstrap-pass".to_string(),
    }
}

/// Tests that a registered member can log in with their password.
///
/// Expected: Ok for the right password, InvalidCredentials otherwise
#[tokio::test]
async fn registers_then_logs_in() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let user = service
        .register(register_params("jane@club.test", UserRole::User), None)
        .await
        .unwrap();
    assert_ne!(user.password_hash, "long enough");

    let logged_in = service
        .login(login("jane@club.test", "long enough"), None)
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);

    let wrong = service.login(login("jane@club.test", "wrong password"), None).await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login(login("nobody@club.test", "long enough"), None).await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: Err(EmailTaken) and a single row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service
        .register(register_params("dup@club.test", UserRole::User), None)
        .await
        .unwrap();
    let result = service
        .register(register_params("dup@club.test", UserRole::User), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::EmailTaken))
    ));
    assert_eq!(UserEntity::find().count(db).await?, 1);

    Ok(())
}

/// Tests that only an admin may register another admin.
///
/// Expected: denied without caller and for a member, allowed for an admin
#[tokio::test]
async fn admin_registration_requires_admin_caller() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    let member = member(db).await?;
    let admin = admin(db).await?;

    let anonymous = service
        .register(register_params("a1@club.test", UserRole::Admin), None)
        .await;
    assert!(is_access_denied(&anonymous));

    let by_member = service
        .register(register_params("a2@club.test", UserRole::Admin), Some(&member))
        .await;
    assert!(is_access_denied(&by_member));

    let by_admin = service
        .register(register_params("a3@club.test", UserRole::Admin), Some(&admin))
        .await
        .unwrap();
    assert_eq!(by_admin.role, UserRole::Admin);

    assert_eq!(UserEntity::find().count(db).await?, 3);

    Ok(())
}

/// Tests the configured admin bootstrap.
///
/// Expected: first login creates one admin, later logins create nothing
#[tokio::test]
async fn bootstrap_login_creates_admin_once() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    let bootstrap = bootstrap();

    let first = service
        .login(login("root@club.test", "bootstrap-pass"), Some(&bootstrap))
        .await
        .unwrap();
    assert_eq!(first.role, UserRole::Admin);
    assert_eq!(first.contact, "0000000000");

    let second = service
        .login(login("root@club.test", "bootstrap-pass"), Some(&bootstrap))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);

    assert_eq!(UserEntity::find().count(db).await?, 1);

    Ok(())
}

/// Tests that bootstrap credentials do nothing when the bootstrap is disabled.
///
/// Expected: InvalidCredentials and no row
#[tokio::test]
async fn bootstrap_disabled_without_config() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login(login("root@club.test", "bootstrap-pass"), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert_eq!(UserEntity::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a missing field is caught before anything is written.
///
/// Expected: MissingFields listing the required set
#[test]
fn registration_requires_all_fields() {
    let result = RegisterUserParams::from_dto(UserPayloadDto {
        first_name: Some("Jane".to_string()),
        ..Default::default()
    });

    assert!(matches!(result, Err(ValidationError::MissingFields(_))));
}
