//! Domain & parameter models for donations

use chrono::NaiveDateTime;

use crate::{
    model::donation::{DonationDto, DonationPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{
            non_blank, optional_float, optional_id, parse_float, parse_int, present,
            present_value, text_value, DATETIME_FORMAT,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub donation_date: NaiveDateTime,
    pub message: Option<String>,
    pub name: String,
    pub contact: Option<String>,
}

impl Donation {
    pub fn from_entity(entity: entity::donation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            donation_date: entity.donation_date,
            message: entity.message,
            name: entity.name,
            contact: entity.contact,
        }
    }

    pub fn into_dto(self) -> DonationDto {
        DonationDto {
            id: self.id,
            user_id: self.user_id,
            amount: self.amount,
            donation_date: self.donation_date.format(DATETIME_FORMAT).to_string(),
            message: self.message,
            name: self.name,
            contact: self.contact,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDonationParams {
    pub user_id: i32,
    pub amount: f64,
    pub message: Option<String>,
    pub name: String,
    pub contact: Option<String>,
}

impl CreateDonationParams {
    pub fn from_dto(dto: DonationPayloadDto) -> Result<Self, ValidationError> {
        let (Some(user_id), Some(amount), Some(name)) = (
            present_value(dto.user_id),
            present_value(dto.amount),
            present(dto.name),
        ) else {
            return Err(ValidationError::MissingFields(
                "amount, name, user_id".to_string(),
            ));
        };

        Ok(Self {
            user_id: parse_int("user_id", &user_id)?,
            amount: parse_float("amount", &amount)?,
            message: present(dto.message),
            name,
            contact: text_value("contact", dto.contact)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDonationParams {
    pub user_id: Option<i32>,
    pub amount: Option<f64>,
    pub message: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl UpdateDonationParams {
    pub fn from_dto(dto: DonationPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: optional_id("user_id", dto.user_id)?,
            amount: optional_float("amount", dto.amount)?,
            message: present(dto.message),
            name: non_blank("name", dto.name)?,
            contact: text_value("contact", dto.contact)?,
        })
    }
}
