//! Order and order item factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a `pending` order owned by `user_id`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set("pending".to_string()),
        delivery_address: ActiveValue::Set("1 Club Road".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an order item of 2 units at 10.0 each (total 20.0).
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    merchandise_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        merchandise_id: ActiveValue::Set(merchandise_id),
        quantity: ActiveValue::Set(2),
        unit_price: ActiveValue::Set(10.0),
        total: ActiveValue::Set(20.0),
        ..Default::default()
    }
    .insert(db)
    .await
}
