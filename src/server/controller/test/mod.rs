use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    service::auth::token::TokenService,
    startup::build_app,
    state::{AdminBootstrap, AppState},
};

mod admin_only;
mod auth;
mod contact;
mod donation;
mod missing_fields;
mod order;
mod squad;

const SECRET: &str = "test-secret";

async fn club_db() -> TestContext {
    TestBuilder::new().with_club_tables().build().await.unwrap()
}

fn app(db: &DatabaseConnection, bootstrap: Option<AdminBootstrap>) -> Router {
    build_app(AppState::new(
        db.clone(),
        TokenService::new(SECRET, 1),
        bootstrap,
    ))
}

fn token_for(user_id: i32) -> String {
    TokenService::new(SECRET, 1).issue(user_id).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
