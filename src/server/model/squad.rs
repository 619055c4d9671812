//! Domain & parameter models for squad players

use chrono::NaiveDate;

use crate::{
    model::squad::{SquadDto, SquadPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, optional_float, parse_date, present, text_value, DATE_FORMAT},
    },
};

const SQUAD_FIELDS: &str = "first_name, last_name, position, jersey_number, biography, image";

/// The squad player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: String,
    pub biography: String,
    pub image: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Squad {
    pub fn from_entity(entity: entity::squad::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            position: entity.position,
            jersey_number: entity.jersey_number,
            biography: entity.biography,
            image: entity.image,
            weight: entity.weight,
            height: entity.height,
            date_of_birth: entity.date_of_birth,
        }
    }

    pub fn into_dto(self) -> SquadDto {
        SquadDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            jersey_number: self.jersey_number,
            biography: self.biography,
            image: self.image,
            weight: self.weight,
            height: self.height,
            date_of_birth: self
                .date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Parameters for adding a player to the squad
#[derive(Debug, Clone)]
pub struct CreateSquadParams {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: String,
    pub biography: String,
    pub image: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateSquadParams {
    pub fn from_dto(dto: SquadPayloadDto) -> Result<Self, ValidationError> {
        let jersey_number = text_value("jersey_number", dto.jersey_number)?;
        let (
            Some(first_name),
            Some(last_name),
            Some(position),
            Some(jersey_number),
            Some(biography),
            Some(image),
        ) = (
            present(dto.first_name),
            present(dto.last_name),
            present(dto.position),
            jersey_number,
            present(dto.biography),
            present(dto.image),
        )
        else {
            return Err(ValidationError::MissingFields(SQUAD_FIELDS.to_string()));
        };

        Ok(Self {
            first_name,
            last_name,
            position,
            jersey_number,
            biography,
            image,
            weight: optional_float("weight", dto.weight)?,
            height: optional_float("height", dto.height)?,
            date_of_birth: present(dto.date_of_birth)
                .map(|d| parse_date("date_of_birth", &d))
                .transpose()?,
        })
    }
}

/// Parameters for a partial squad edit. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSquadParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateSquadParams {
    pub fn from_dto(dto: SquadPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: non_blank("first_name", dto.first_name)?,
            last_name: non_blank("last_name", dto.last_name)?,
            position: non_blank("position", dto.position)?,
            jersey_number: text_value("jersey_number", dto.jersey_number)?,
            biography: non_blank("biography", dto.biography)?,
            image: non_blank("image", dto.image)?,
            weight: optional_float("weight", dto.weight)?,
            height: optional_float("height", dto.height)?,
            date_of_birth: present(dto.date_of_birth)
                .map(|d| parse_date("date_of_birth", &d))
                .transpose()?,
        })
    }
}
