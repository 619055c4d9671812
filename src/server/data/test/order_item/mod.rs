use crate::server::{
    data::order_item::OrderItemRepository,
    model::order_item::{CreateOrderItemParams, UpdateOrderItemParams},
};
use entity::prelude::User;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user_id;
mod update;
