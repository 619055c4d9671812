//! Domain & parameter models for contact messages

use chrono::NaiveDateTime;

use crate::{
    model::contact::{ContactDto, ContactPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, optional_id, present, validate_email, DATETIME_FORMAT},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: NaiveDateTime,
    pub user_id: Option<i32>,
}

impl Contact {
    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            date: entity.date,
            user_id: entity.user_id,
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            name: self.name,
            email: self.email,
            message: self.message,
            date: self.date.format(DATETIME_FORMAT).to_string(),
            user_id: self.user_id,
        }
    }
}

/// Parameters for creating a contact message. The date is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub user_id: Option<i32>,
}

impl CreateContactParams {
    pub fn from_dto(dto: ContactPayloadDto) -> Result<Self, ValidationError> {
        let (Some(name), Some(email), Some(message)) =
            (present(dto.name), present(dto.email), present(dto.message))
        else {
            return Err(ValidationError::MissingFields(
                "name, email, message".to_string(),
            ));
        };

        validate_email(&email)?;

        Ok(Self {
            name,
            email,
            message,
            user_id: optional_id("user_id", dto.user_id)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateContactParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub user_id: Option<i32>,
}

impl UpdateContactParams {
    pub fn from_dto(dto: ContactPayloadDto) -> Result<Self, ValidationError> {
        let email = non_blank("email", dto.email)?;
        if let Some(email) = &email {
            validate_email(email)?;
        }

        Ok(Self {
            name: non_blank("name", dto.name)?,
            email,
            message: non_blank("message", dto.message)?,
            user_id: optional_id("user_id", dto.user_id)?,
        })
    }
}
