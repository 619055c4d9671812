use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{merchandise::MerchandiseRepository, order::OrderRepository, order_item::OrderItemRepository},
    error::AppError,
    middleware::auth::Permission,
    model::{
        order_item::{CreateOrderItemParams, OrderItem, UpdateOrderItemParams},
        user::User,
    },
};

const ORDER_NOT_FOUND: &str = "Order not found";
const MERCHANDISE_NOT_FOUND: &str = "Merchandise not found";

pub struct OrderItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a line item to one of the caller's orders
    ///
    /// The total is computed from quantity and unit price.
    ///
    /// # Returns
    /// - `Ok(OrderItem)` - The created item
    /// - `Err(AppError::NotFound)` - Order or merchandise does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - The order belongs to someone else
    pub async fn create(
        &self,
        caller: &User,
        params: CreateOrderItemParams,
    ) -> Result<OrderItem, AppError> {
        let txn = self.db.begin().await?;

        check_order_owner(&txn, params.order_id, caller).await?;
        ensure_merchandise(&txn, params.merchandise_id).await?;

        let item = OrderItemRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(item)
    }

    /// Lists the items of every order the caller owns
    pub async fn get_all_for(&self, caller: &User) -> Result<Vec<OrderItem>, AppError> {
        Ok(OrderItemRepository::new(self.db)
            .get_by_user_id(caller.id)
            .await?)
    }

    /// Lists the items of one of the caller's orders
    pub async fn get_by_order(
        &self,
        order_id: i32,
        caller: &User,
    ) -> Result<Vec<OrderItem>, AppError> {
        check_order_owner(self.db, order_id, caller).await?;

        Ok(OrderItemRepository::new(self.db)
            .get_by_order_id(order_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32, caller: &User) -> Result<Option<OrderItem>, AppError> {
        let Some(item) = OrderItemRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        check_order_owner(self.db, item.order_id, caller).await?;

        Ok(Some(item))
    }

    /// Applies a partial edit and recomputes the total
    ///
    /// The parent order cannot be changed. A new merchandise ID must exist.
    pub async fn update(
        &self,
        id: i32,
        caller: &User,
        params: UpdateOrderItemParams,
    ) -> Result<Option<OrderItem>, AppError> {
        let txn = self.db.begin().await?;
        let item_repo = OrderItemRepository::new(&txn);

        let Some(item) = item_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        check_order_owner(&txn, item.order_id, caller).await?;

        if let Some(merchandise_id) = params.merchandise_id {
            ensure_merchandise(&txn, merchandise_id).await?;
        }

        let item = item_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(item))
    }

    pub async fn delete(&self, id: i32, caller: &User) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let item_repo = OrderItemRepository::new(&txn);

        let Some(item) = item_repo.find_by_id(id).await? else {
            return Ok(false);
        };

        check_order_owner(&txn, item.order_id, caller).await?;

        item_repo.delete(id).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn check_order_owner<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
    caller: &User,
) -> Result<(), AppError> {
    let Some(order) = OrderRepository::new(db).find_by_id(order_id).await? else {
        return Err(AppError::NotFound(ORDER_NOT_FOUND.to_string()));
    };

    Permission::Owner(order.user_id).check(caller)?;

    Ok(())
}

async fn ensure_merchandise<C: ConnectionTrait>(db: &C, merchandise_id: i32) -> Result<(), AppError> {
    if MerchandiseRepository::new(db)
        .find_by_id(merchandise_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(MERCHANDISE_NOT_FOUND.to_string()));
    }

    Ok(())
}
