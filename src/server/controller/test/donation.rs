use entity::prelude::Donation;

use super::*;

async fn create_donation(db: &DatabaseConnection, user_id: i32) -> i64 {
    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/donation/create",
        None,
        Some(json!({"user_id": user_id, "amount": 25, "name": "Jane", "message": "Kit"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["donation"]["id"].as_i64().unwrap()
}

/// Tests a partial donation edit.
///
/// Expected: amount changes, name and message stay
#[tokio::test]
async fn edit_donation_changes_named_fields_only() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let donor = factory::create_user(db).await?;
    let id = create_donation(db, donor.id).await;

    let (status, body) = send(
        app(db, None),
        Method::PATCH,
        &format!("/api/v1/donation/edit/{}", id),
        None,
        Some(json!({"amount": "30.5"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Donation updated successfully");
    assert_eq!(body["donation"]["amount"], 30.5);
    assert_eq!(body["donation"]["name"], "Jane");
    assert_eq!(body["donation"]["message"], "Kit");

    Ok(())
}

/// Expected: 400 for a non-numeric amount and the stored amount unchanged
#[tokio::test]
async fn edit_donation_rejects_bad_amount() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let donor = factory::create_user(db).await?;
    let id = create_donation(db, donor.id).await;

    let (status, body) = send(
        app(db, None),
        Method::PUT,
        &format!("/api/v1/donation/edit/{}", id),
        None,
        Some(json!({"amount": "lots"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid amount format (must be a number)");
    let stored = Donation::find_by_id(id as i32).one(db).await?.unwrap();
    assert_eq!(stored.amount, 25.0);

    Ok(())
}

/// Tests delete followed by read and a second delete.
///
/// Expected: 200, then 404 for both
#[tokio::test]
async fn delete_donation() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let donor = factory::create_user(db).await?;
    let id = create_donation(db, donor.id).await;
    let uri = format!("/api/v1/donation/delete/{}", id);

    let (status, body) = send(app(db, None), Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Donation deleted successfully");

    let (status, _) = send(
        app(db, None),
        Method::GET,
        &format!("/api/v1/donation/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app(db, None), Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Donation not found");
    assert_eq!(Donation::find().count(db).await?, 0);

    Ok(())
}
