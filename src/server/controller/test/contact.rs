use entity::prelude::Contact;

use super::*;

/// Tests the public contact form.
///
/// Expected: 200 with the stored contact in the envelope
#[tokio::test]
async fn create_contact_returns_ok_envelope() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/contacts/create",
        None,
        Some(json!({"name": "A", "email": "a@b.com", "message": "hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact created successfully");
    assert!(body["contact"]["id"].is_i64());
    assert_eq!(body["contact"]["email"], "a@b.com");
}

/// Expected: 400 naming the required fields and no row
#[tokio::test]
async fn create_contact_requires_fields() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/contacts/create",
        None,
        Some(json!({"name": "A", "message": "hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields (name, email, message) are required");
    assert_eq!(Contact::find().count(db).await?, 0);

    Ok(())
}

/// Expected: 400 for a body that is not JSON
#[tokio::test]
async fn malformed_body_is_bad_request() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/contacts/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(db, None).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Expected: 404 with an error body
#[tokio::test]
async fn read_missing_contact_is_not_found() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db, None), Method::GET, "/api/v1/contacts/404", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Contact not found");
}

/// Tests create, partial edit through PATCH, delete and read after delete.
///
/// Expected: each step reflected in the following read
#[tokio::test]
async fn contact_lifecycle() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (_, created) = send(
        app(db, None),
        Method::POST,
        "/api/v1/contacts/create",
        None,
        Some(json!({"name": "A", "email": "life@b.com", "message": "hi"})),
    )
    .await;
    let id = created["contact"]["id"].as_i64().unwrap();

    let (status, edited) = send(
        app(db, None),
        Method::PATCH,
        &format!("/api/v1/contacts/edit/{}", id),
        None,
        Some(json!({"message": "changed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["contact"]["message"], "changed");
    assert_eq!(edited["contact"]["email"], "life@b.com");

    let (status, deleted) = send(
        app(db, None),
        Method::DELETE,
        &format!("/api/v1/contacts/delete/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Contact deleted successfully");

    let (status, _) = send(
        app(db, None),
        Method::GET,
        &format!("/api/v1/contacts/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
