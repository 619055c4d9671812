//! Helpers shared by the factories.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique number.
///
/// Factories derive unique columns (emails, jersey numbers, product names) from it.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Creates an order item together with the user, merchandise and order it hangs off.
///
/// Needs the tables registered by `TestBuilder::with_order_tables`.
pub async fn create_order_item_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::merchandise::Model,
        entity::order::Model,
        entity::order_item::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let merchandise = crate::factory::merchandise::create_merchandise(db).await?;
    let order = crate::factory::order::create_order(db, user.id).await?;
    let item = crate::factory::order::create_order_item(db, order.id, merchandise.id).await?;

    Ok((user, merchandise, order, item))
}
