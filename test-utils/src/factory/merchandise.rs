//! Merchandise factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a merchandise item priced at 40.0 with 10 in stock.
pub async fn create_merchandise(
    db: &DatabaseConnection,
) -> Result<entity::merchandise::Model, DbErr> {
    let id = next_id();
    entity::merchandise::ActiveModel {
        name: ActiveValue::Set(format!("Jersey {}", id)),
        description: ActiveValue::Set("Home jersey".to_string()),
        price: ActiveValue::Set(40.0),
        stock: ActiveValue::Set(10),
        image: ActiveValue::Set("jersey.png".to_string()),
        category: ActiveValue::Set("Apparel".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
