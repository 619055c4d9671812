use super::*;

/// Tests that items are found through the owner of their order.
///
/// Expected: Ok with only the first user's item
#[tokio::test]
async fn returns_items_of_users_orders_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, merchandise, _order, item) =
        factory::helpers::create_order_item_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let other_order = factory::create_order(db, other.id).await?;
    factory::create_order_item(db, other_order.id, merchandise.id).await?;

    let items = OrderItemRepository::new(db)
        .get_by_user_id(user.id)
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);

    Ok(())
}
