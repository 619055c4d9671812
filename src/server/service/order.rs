use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    middleware::auth::Permission,
    model::{
        order::{CreateOrderParams, Order, UpdateOrderParams},
        user::User,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order owned by the caller bound into `params`
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let order = OrderRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Lists the orders owned by the caller
    pub async fn get_all_for(&self, caller: &User) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db)
            .get_by_user_id(caller.id)
            .await?)
    }

    /// Gets one of the caller's orders
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The order, owned by the caller
    /// - `Ok(None)` - No order with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - The order belongs to someone else
    pub async fn get_by_id(&self, id: i32, caller: &User) -> Result<Option<Order>, AppError> {
        let Some(order) = OrderRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Permission::Owner(order.user_id).check(caller)?;

        Ok(Some(order))
    }

    pub async fn update(
        &self,
        id: i32,
        caller: &User,
        params: UpdateOrderParams,
    ) -> Result<Option<Order>, AppError> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let Some(order) = order_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Permission::Owner(order.user_id).check(caller)?;

        let order = order_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(order))
    }

    /// Deletes one of the caller's orders; its items go with it through the cascading foreign key
    pub async fn delete(&self, id: i32, caller: &User) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let Some(order) = order_repo.find_by_id(id).await? else {
            return Ok(false);
        };

        Permission::Owner(order.user_id).check(caller)?;

        order_repo.delete(id).await?;

        txn.commit().await?;

        Ok(true)
    }
}
