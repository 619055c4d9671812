//! Domain & parameter models for club shop merchandise

use crate::{
    model::merchandise::{MerchandiseDto, MerchandisePayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, optional_count, optional_float, parse_count, parse_float, present, present_value},
    },
};

const MERCHANDISE_FIELDS: &str = "name, description, price, stock, image, category";

#[derive(Debug, Clone, PartialEq)]
pub struct Merchandise {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: String,
    pub category: String,
}

impl Merchandise {
    pub fn from_entity(entity: entity::merchandise::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            image: entity.image,
            category: entity.category,
        }
    }

    pub fn into_dto(self) -> MerchandiseDto {
        MerchandiseDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image: self.image,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMerchandiseParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: String,
    pub category: String,
}

impl CreateMerchandiseParams {
    pub fn from_dto(dto: MerchandisePayloadDto) -> Result<Self, ValidationError> {
        let (Some(name), Some(description), Some(price), Some(stock), Some(image), Some(category)) = (
            present(dto.name),
            present(dto.description),
            present_value(dto.price),
            present_value(dto.stock),
            present(dto.image),
            present(dto.category),
        ) else {
            return Err(ValidationError::MissingFields(
                MERCHANDISE_FIELDS.to_string(),
            ));
        };

        Ok(Self {
            name,
            description,
            price: parse_float("price", &price)?,
            stock: parse_count("stock", &stock)?,
            image,
            category,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMerchandiseParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl UpdateMerchandiseParams {
    pub fn from_dto(dto: MerchandisePayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            description: non_blank("description", dto.description)?,
            price: optional_float("price", dto.price)?,
            stock: optional_count("stock", dto.stock)?,
            image: non_blank("image", dto.image)?,
            category: non_blank("category", dto.category)?,
        })
    }
}
