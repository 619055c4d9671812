//! Domain & parameter models for player statistics
//!
//! A statistic row belongs to one squad player and carries seven non-negative counters.
//! Only `matches_played` is mandatory on create; the other counters default to zero.

use crate::{
    model::player_statistic::{PlayerStatisticDto, PlayerStatisticPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{optional_count, parse_count, parse_int, present_value},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatistic {
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

impl PlayerStatistic {
    pub fn from_entity(entity: entity::player_statistic::Model) -> Self {
        Self {
            id: entity.id,
            squad_id: entity.squad_id,
            matches_played: entity.matches_played,
            tries_scored: entity.tries_scored,
            conversions: entity.conversions,
            penalties: entity.penalties,
            yellow_cards: entity.yellow_cards,
            red_cards: entity.red_cards,
            minutes_played: entity.minutes_played,
        }
    }

    pub fn into_dto(self) -> PlayerStatisticDto {
        PlayerStatisticDto {
            id: self.id,
            squad_id: self.squad_id,
            matches_played: self.matches_played,
            tries_scored: self.tries_scored,
            conversions: self.conversions,
            penalties: self.penalties,
            yellow_cards: self.yellow_cards,
            red_cards: self.red_cards,
            minutes_played: self.minutes_played,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreatePlayerStatisticParams {
    pub squad_id: i32,
    pub matches_played: i32,
    pub tries_scored: i32,
    pub conversions: i32,
    pub penalties: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub minutes_played: i32,
}

impl CreatePlayerStatisticParams {
    pub fn from_dto(dto: PlayerStatisticPayloadDto) -> Result<Self, ValidationError> {
        let (Some(squad_id), Some(matches_played)) = (
            present_value(dto.squad_id),
            present_value(dto.matches_played),
        ) else {
            return Err(ValidationError::MissingFields(
                "squad_id, matches_played".to_string(),
            ));
        };

        Ok(Self {
            squad_id: parse_int("squad_id", &squad_id)?,
            matches_played: parse_count("matches_played", &matches_played)?,
            tries_scored: optional_count("tries_scored", dto.tries_scored)?.unwrap_or(0),
            conversions: optional_count("conversions", dto.conversions)?.unwrap_or(0),
            penalties: optional_count("penalties", dto.penalties)?.unwrap_or(0),
            yellow_cards: optional_count("yellow_cards", dto.yellow_cards)?.unwrap_or(0),
            red_cards: optional_count("red_cards", dto.red_cards)?.unwrap_or(0),
            minutes_played: optional_count("minutes_played", dto.minutes_played)?.unwrap_or(0),
        })
    }
}

/// Counter changes for an edit. The owning squad cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerStatisticParams {
    pub matches_played: Option<i32>,
    pub tries_scored: Option<i32>,
    pub conversions: Option<i32>,
    pub penalties: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
    pub minutes_played: Option<i32>,
}

impl UpdatePlayerStatisticParams {
    pub fn from_dto(dto: PlayerStatisticPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            matches_played: optional_count("matches_played", dto.matches_played)?,
            tries_scored: optional_count("tries_scored", dto.tries_scored)?,
            conversions: optional_count("conversions", dto.conversions)?,
            penalties: optional_count("penalties", dto.penalties)?,
            yellow_cards: optional_count("yellow_cards", dto.yellow_cards)?,
            red_cards: optional_count("red_cards", dto.red_cards)?,
            minutes_played: optional_count("minutes_played", dto.minutes_played)?,
        })
    }
}
