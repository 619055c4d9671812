//! Domain & parameter models for event tickets

use crate::{
    model::ticket::{TicketDto, TicketPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{optional_float, optional_id, parse_float, parse_int, present_value, text_value},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub event_id: i32,
    pub price: f64,
    pub section: String,
    pub row: String,
    pub seat: String,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            price: entity.price,
            section: entity.section,
            row: entity.row,
            seat: entity.seat,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            event_id: self.event_id,
            price: self.price,
            section: self.section,
            row: self.row,
            seat: self.seat,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub event_id: i32,
    pub price: f64,
    pub section: String,
    pub row: String,
    pub seat: String,
}

impl CreateTicketParams {
    pub fn from_dto(dto: TicketPayloadDto) -> Result<Self, ValidationError> {
        let section = text_value("section", dto.section)?;
        let row = text_value("row", dto.row)?;
        let seat = text_value("seat", dto.seat)?;
        let (Some(event_id), Some(price), Some(section), Some(row), Some(seat)) = (
            present_value(dto.event_id),
            present_value(dto.price),
            section,
            row,
            seat,
        ) else {
            return Err(ValidationError::MissingFields(
                "event_id, price, section, row, seat".to_string(),
            ));
        };

        Ok(Self {
            event_id: parse_int("event_id", &event_id)?,
            price: parse_float("price", &price)?,
            section,
            row,
            seat,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTicketParams {
    pub event_id: Option<i32>,
    pub price: Option<f64>,
    pub section: Option<String>,
    pub row: Option<String>,
    pub seat: Option<String>,
}

impl UpdateTicketParams {
    pub fn from_dto(dto: TicketPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            event_id: optional_id("event_id", dto.event_id)?,
            price: optional_float("price", dto.price)?,
            section: text_value("section", dto.section)?,
            row: text_value("row", dto.row)?,
            seat: text_value("seat", dto.seat)?,
        })
    }
}
