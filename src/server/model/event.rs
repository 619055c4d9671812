//! Domain & parameter models for club events

use chrono::NaiveDateTime;

use crate::{
    model::event::{EventDto, EventPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, parse_datetime, present, DATETIME_FORMAT},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            date: entity.date,
            location: entity.location,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            description: self.description,
            date: self.date.format(DATETIME_FORMAT).to_string(),
            location: self.location,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub name: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
}

impl CreateEventParams {
    pub fn from_dto(dto: EventPayloadDto) -> Result<Self, ValidationError> {
        let (Some(name), Some(description), Some(date), Some(location)) = (
            present(dto.name),
            present(dto.description),
            present(dto.date),
            present(dto.location),
        ) else {
            return Err(ValidationError::MissingFields(
                "name, description, date, location".to_string(),
            ));
        };

        Ok(Self {
            name,
            description,
            date: parse_datetime("date", &date)?,
            location,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub location: Option<String>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: EventPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            description: non_blank("description", dto.description)?,
            date: non_blank("date", dto.date)?
                .map(|d| parse_datetime("date", &d))
                .transpose()?,
            location: non_blank("location", dto.location)?,
        })
    }
}
