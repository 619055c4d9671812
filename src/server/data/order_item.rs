//! Order item data repository
//!
//! Writes here always store a total consistent with quantity and unit price.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::order_item::{
    line_total, CreateOrderItemParams, OrderItem, UpdateOrderItemParams,
};

pub struct OrderItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOrderItemParams) -> Result<OrderItem, DbErr> {
        let total = params.total();
        let item = entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            merchandise_id: ActiveValue::Set(params.merchandise_id),
            quantity: ActiveValue::Set(params.quantity),
            unit_price: ActiveValue::Set(params.unit_price),
            total: ActiveValue::Set(total),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrderItem::from_entity(item))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderItem>, DbErr> {
        Ok(entity::prelude::OrderItem::find_by_id(id)
            .one(self.db)
            .await?
            .map(OrderItem::from_entity))
    }

    /// Gets the items of one order ordered by ID
    pub async fn get_by_order_id(&self, order_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        Ok(entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(OrderItem::from_entity)
            .collect())
    }

    /// Gets the items of every order owned by a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        Ok(entity::prelude::OrderItem::find()
            .inner_join(entity::prelude::Order)
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(OrderItem::from_entity)
            .collect())
    }

    /// Updates the present fields and recomputes the total
    pub async fn update(&self, id: i32, params: UpdateOrderItemParams) -> Result<OrderItem, DbErr> {
        let item = entity::prelude::OrderItem::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order item with id {} not found",
                id
            )))?;

        let quantity = params.quantity.unwrap_or(item.quantity);
        let unit_price = params.unit_price.unwrap_or(item.unit_price);

        let mut active = item.clone().into_active_model();
        if let Some(merchandise_id) = params.merchandise_id {
            active.merchandise_id = ActiveValue::Set(merchandise_id);
        }
        active.quantity = ActiveValue::Set(quantity);
        active.unit_price = ActiveValue::Set(unit_price);
        active.total = ActiveValue::Set(line_total(quantity, unit_price));

        Ok(OrderItem::from_entity(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OrderItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
