use super::*;

/// Tests creating an order and adding an item through the API.
///
/// Expected: order owned by the caller and item total computed
#[tokio::test]
async fn places_order_with_item() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let buyer = factory::create_user(db).await?;
    let merchandise = factory::create_merchandise(db).await?;
    let token = token_for(buyer.id);

    let (status, order) = send(
        app(db, None),
        Method::POST,
        "/api/v1/orders/create",
        Some(&token),
        Some(json!({"status_of_order": "pending", "address_of_delivery": "1 Club Road"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["order"]["user_id"], buyer.id);
    let order_id = order["order"]["id"].as_i64().unwrap();

    let (status, item) = send(
        app(db, None),
        Method::POST,
        "/api/v1/orderitem/create",
        Some(&token),
        Some(json!({
            "order_id": order_id,
            "merchandise_id": merchandise.id,
            "quantity": "3",
            "price_of_item": 12.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["order_item"]["total"], 37.5);

    Ok(())
}

/// Expected: 400 for another user's order and the order unchanged
#[tokio::test]
async fn non_owner_edit_is_rejected() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;

    let (status, _) = send(
        app(db, None),
        Method::PUT,
        &format!("/api/v1/orders/edit/{}", order.id),
        Some(&token_for(intruder.id)),
        Some(json!({"status": "cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(
        app(db, None),
        Method::GET,
        &format!("/api/v1/orders/{}", order.id),
        Some(&token_for(owner.id)),
        None,
    )
    .await;
    assert_eq!(body["order"]["status"], "pending");

    Ok(())
}

/// Tests that a token naming a deleted user is rejected.
///
/// Expected: 400 "User not found"
#[tokio::test]
async fn token_for_missing_user_is_rejected() {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, None),
        Method::GET,
        "/api/v1/orders",
        Some(&token_for(404)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User not found");
}
