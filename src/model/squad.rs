use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A player on the club squad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SquadDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: String,
    pub biography: String,
    pub image: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SquadPayloadDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    #[schema(value_type = Option<String>)]
    pub jersey_number: Option<Value>,
    pub biography: Option<String>,
    pub image: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Value>,
    #[schema(value_type = Option<f64>)]
    pub height: Option<Value>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SquadResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub squad: SquadDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SquadListDto {
    pub squads: Vec<SquadDto>,
}
