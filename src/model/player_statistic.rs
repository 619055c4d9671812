use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatisticDto {
    pub id: i32,
    pub squad_id: i32,
    pub matches_played: i32,
    pub tries_scored: i32,
    pub conversions: i32,
    pub penalties: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub minutes_played: i32,
}

/// Counters accept integers or integer strings. Omitted counters default to zero on create.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PlayerStatisticPayloadDto {
    #[schema(value_type = Option<i32>)]
    pub squad_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub matches_played: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub tries_scored: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub conversions: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub penalties: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub yellow_cards: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub red_cards: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub minutes_played: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatisticResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub statistic: PlayerStatisticDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatisticListDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub statistics: Vec<PlayerStatisticDto>,
}
