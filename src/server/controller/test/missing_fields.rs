use entity::prelude::{Donation, Event, Merchandise, Order, OrderItem, PlayerStatistic, Ticket};

use super::*;

/// Tests create with a required field left out, for every family with required fields.
///
/// Expected: 400 listing the required fields and no row inserted
#[tokio::test]
async fn create_without_required_fields_inserts_nothing() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let event = factory::create_event(db).await?;
    let squad = factory::create_squad(db).await?;
    let merchandise = factory::create_merchandise(db).await?;
    let order = factory::create_order(db, admin.id).await?;
    let token = token_for(admin.id);

    let cases = [
        (
            "/api/v1/event/create",
            json!({"name": "Derby", "description": "Home", "date": "2025-06-01 15:00:00"}),
            "All fields (name, description, date, location) are required",
        ),
        (
            "/api/v1/ticket/create",
            json!({"event_id": event.id, "price": 10, "section": "North", "row": "A"}),
            "All fields (event_id, price, section, row, seat) are required",
        ),
        (
            "/api/v1/orders/create",
            json!({"status": "pending", "delivery_address": "  "}),
            "All fields (status, delivery_address) are required",
        ),
        (
            "/api/v1/orderitem/create",
            json!({"order_id": order.id, "merchandise_id": merchandise.id, "quantity": 2}),
            "All fields (order_id, merchandise_id, quantity, unit_price) are required",
        ),
        (
            "/api/v1/merchandise/create",
            json!({"name": "Scarf", "description": "Wool", "price": 9, "image": "s.png", "category": "Gifts"}),
            "All fields (name, description, price, stock, image, category) are required",
        ),
        (
            "/api/v1/donation/create",
            json!({"user_id": admin.id, "amount": null, "name": "Jane"}),
            "All fields (amount, name, user_id) are required",
        ),
        (
            "/api/v1/playerstatistics/create",
            json!({"squad_id": squad.id, "tries_scored": 2}),
            "All fields (squad_id, matches_played) are required",
        ),
    ];

    for (uri, body, message) in cases {
        let (status, response) =
            send(app(db, None), Method::POST, uri, Some(&token), Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response["error"], message, "{}", uri);
    }

    assert_eq!(Event::find().count(db).await?, 1);
    assert_eq!(Ticket::find().count(db).await?, 0);
    assert_eq!(Order::find().count(db).await?, 1);
    assert_eq!(OrderItem::find().count(db).await?, 0);
    assert_eq!(Merchandise::find().count(db).await?, 1);
    assert_eq!(Donation::find().count(db).await?, 0);
    assert_eq!(PlayerStatistic::find().count(db).await?, 0);

    Ok(())
}
