use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DonationDto {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    /// `YYYY-MM-DD HH:MM:SS`, assigned by the server
    pub donation_date: String,
    pub message: Option<String>,
    pub name: String,
    pub contact: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DonationPayloadDto {
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Value>,
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Value>,
    #[serde(alias = "description")]
    pub message: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub contact: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonationResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub donation: DonationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonationListDto {
    pub donations: Vec<DonationDto>,
}
