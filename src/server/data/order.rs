//! Order data repository

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::order::{CreateOrderParams, Order, UpdateOrderParams};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            status: ActiveValue::Set(params.status),
            delivery_address: ActiveValue::Set(params.delivery_address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(order))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        Ok(entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .map(Order::from_entity))
    }

    /// Gets the orders owned by a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        Ok(entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdateOrderParams) -> Result<Order, DbErr> {
        let order = entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Order with id {} not found", id)))?;

        let mut active = order.clone().into_active_model();
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(delivery_address) = params.delivery_address {
            active.delivery_address = ActiveValue::Set(delivery_address);
        }

        if !active.is_changed() {
            return Ok(Order::from_entity(order));
        }

        Ok(Order::from_entity(active.update(self.db).await?))
    }

    /// Deletes an order; its items follow through the cascading foreign key
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
