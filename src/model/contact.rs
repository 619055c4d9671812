use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    /// `YYYY-MM-DD HH:MM:SS`, assigned by the server
    pub date: String,
    pub user_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContactPayloadDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub contact: ContactDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactListDto {
    pub contacts: Vec<ContactDto>,
}
