use super::*;

/// Tests that changing the quantity recomputes the total from the stored price.
///
/// Expected: Ok with total 5 x 10.0
#[tokio::test]
async fn recomputes_total_on_quantity_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _merchandise, _order, item) =
        factory::helpers::create_order_item_with_dependencies(db).await?;

    let updated = OrderItemRepository::new(db)
        .update(
            item.id,
            UpdateOrderItemParams {
                quantity: Some(5),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.unit_price, 10.0);
    assert_eq!(updated.total, 50.0);

    Ok(())
}

/// Expected: Ok with total 2 x 7.5
#[tokio::test]
async fn recomputes_total_on_price_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _merchandise, _order, item) =
        factory::helpers::create_order_item_with_dependencies(db).await?;

    let updated = OrderItemRepository::new(db)
        .update(
            item.id,
            UpdateOrderItemParams {
                unit_price: Some(7.5),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.total, 15.0);

    Ok(())
}
