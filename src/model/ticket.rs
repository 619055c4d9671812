use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub event_id: i32,
    pub price: f64,
    pub section: String,
    pub row: String,
    pub seat: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TicketPayloadDto {
    #[schema(value_type = Option<i32>)]
    pub event_id: Option<Value>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub section: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub row: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub seat: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub ticket: TicketDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
}
