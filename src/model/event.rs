use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    pub location: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EventPayloadDto {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub date: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub event: EventDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
}
