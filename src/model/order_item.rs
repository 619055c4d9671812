use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub order_id: i32,
    pub merchandise_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    /// Always `quantity * unit_price`.
    pub total: f64,
}

/// `order_id` is only read on create; an item never moves between orders.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderItemPayloadDto {
    #[schema(value_type = Option<i32>)]
    pub order_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub merchandise_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
    #[serde(alias = "price_of_item")]
    #[schema(value_type = Option<f64>)]
    pub unit_price: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub order_item: OrderItemDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemListDto {
    pub order_items: Vec<OrderItemDto>,
}
