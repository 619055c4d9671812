//! Domain & parameter models for shop orders

use crate::{
    model::order::{OrderDto, OrderPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{non_blank, present},
    },
};

/// The order domain model. `user_id` is the owner and the only user allowed to touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub status: String,
    pub delivery_address: String,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            status: entity.status,
            delivery_address: entity.delivery_address,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            status: self.status,
            delivery_address: self.delivery_address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub status: String,
    pub delivery_address: String,
}

impl CreateOrderParams {
    /// Validates the payload and binds the order to its owner
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller, who becomes the owner
    /// - `dto` - Order payload
    pub fn from_dto(user_id: i32, dto: OrderPayloadDto) -> Result<Self, ValidationError> {
        let (Some(status), Some(delivery_address)) =
            (present(dto.status), present(dto.delivery_address))
        else {
            return Err(ValidationError::MissingFields(
                "status, delivery_address".to_string(),
            ));
        };

        Ok(Self {
            user_id,
            status,
            delivery_address,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    pub status: Option<String>,
    pub delivery_address: Option<String>,
}

impl UpdateOrderParams {
    pub fn from_dto(dto: OrderPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            status: non_blank("status", dto.status)?,
            delivery_address: non_blank("delivery_address", dto.delivery_address)?,
        })
    }
}
