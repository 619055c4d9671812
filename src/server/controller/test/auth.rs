use entity::prelude::User;

use super::*;

fn registration(email: &str) -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "contact": 123456789,
        "email": email,
        "password": "long enough",
        "join_date": "2024-09-01",
        "membership_status": "Active"
    })
}

/// Tests registration followed by login and an authenticated read.
///
/// Expected: 201, then 200 with a token that opens the user list
#[tokio::test]
async fn register_login_and_use_token() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, registered) = send(
        app(db, None),
        Method::POST,
        "/api/v1/user/register",
        None,
        Some(registration("jane@club.test")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(registered["user"]["role"], "user");
    assert!(registered["user"].get("password_hash").is_none());

    let (status, logged_in) = send(
        app(db, None),
        Method::POST,
        "/api/v1/user/login",
        None,
        Some(json!({"email": "jane@club.test", "password": "long enough"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = logged_in["access_token"].as_str().unwrap().to_string();

    let (status, users) = send(app(db, None), Method::GET, "/api/v1/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users["users"].as_array().unwrap().len(), 1);
}

/// Expected: 400 "Invalid email or password"
#[tokio::test]
async fn login_with_wrong_password_fails() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/user/login",
        None,
        Some(json!({"email": user.email, "password": "whatever"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");

    Ok(())
}

/// Tests the bootstrap login end to end.
///
/// Expected: two logins, one admin row
#[tokio::test]
async fn bootstrap_login_is_idempotent() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let bootstrap = AdminBootstrap {
        email: "root@club.test".to_string(),
        password: "bootstrap-pass".to_string(),
    };
    let credentials = json!({"email": "root@club.test", "password": "bootstrap-pass"});

    for _ in 0..2 {
        let (status, body) = send(
            app(db, Some(bootstrap.clone())),
            Method::POST,
            "/api/v1/user/login",
            None,
            Some(credentials.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["role"], "admin");
    }

    assert_eq!(User::find().count(db).await?, 1);

    Ok(())
}

/// Expected: 401 for user listing without a token
#[tokio::test]
async fn user_list_requires_token() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db, None), Method::GET, "/api/v1/user", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization token");
}

/// Expected: plain-text banner at the root
#[tokio::test]
async fn index_returns_banner() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let response = app(db, None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    assert_eq!(&bytes[..], b"Website Api");
}
