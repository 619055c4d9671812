use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
};
use chrono::NaiveDate;
use entity::prelude::User as UserEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerIdentity, Permission},
    model::user::{User, UserRole},
    service::auth::token::TokenService,
    state::AppState,
};

mod bearer;
mod permission;
mod require;

const SECRET: &str = "middleware-test-secret";

fn user(id: i32, role: UserRole) -> User {
    User {
        id,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        contact: "0000000000".to_string(),
        email: format!("user{}@club.test", id),
        password_hash: String::new(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        membership_status: "Active".to_string(),
        role,
    }
}

fn parts_with_header(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/");
    if let Some(value) = value {
        builder = builder.header(AUTHORIZATION, value);
    }

    builder.body(()).unwrap().into_parts().0
}
