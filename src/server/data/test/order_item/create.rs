use super::*;

/// Tests that the stored total is quantity times unit price.
///
/// Expected: Ok with total 3 x 12.5
#[tokio::test]
async fn computes_total_on_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let merchandise = factory::create_merchandise(db).await?;
    let order = factory::create_order(db, user.id).await?;

    let item = OrderItemRepository::new(db)
        .create(CreateOrderItemParams {
            order_id: order.id,
            merchandise_id: merchandise.id,
            quantity: 3,
            unit_price: 12.5,
        })
        .await?;

    assert_eq!(item.total, 37.5);
    assert_eq!(item.order_id, order.id);

    Ok(())
}
