use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub status: String,
    pub delivery_address: String,
}

/// The owner is always the caller, so the payload carries no user id.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderPayloadDto {
    #[serde(alias = "status_of_order")]
    pub status: Option<String>,
    #[serde(alias = "address_of_delivery")]
    pub delivery_address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub order: OrderDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderListDto {
    pub orders: Vec<OrderDto>,
}
