use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MerchandiseDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MerchandisePayloadDto {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub stock: Option<Value>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MerchandiseResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub merchandise: MerchandiseDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MerchandiseListDto {
    pub merchandises: Vec<MerchandiseDto>,
}
