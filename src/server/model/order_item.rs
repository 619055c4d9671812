//! Domain & parameter models for order line items
//!
//! The total of a line item is derived, never accepted from clients: it is computed on
//! insert and recomputed whenever quantity or unit price changes.

use crate::{
    model::order_item::{OrderItemDto, OrderItemPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{optional_count, optional_float, optional_id, parse_count, parse_float, parse_int, present_value},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub merchandise_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            merchandise_id: entity.merchandise_id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            total: entity.total,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            order_id: self.order_id,
            merchandise_id: self.merchandise_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total: self.total,
        }
    }
}

/// Line total for a quantity at a unit price.
pub fn line_total(quantity: i32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemParams {
    pub order_id: i32,
    pub merchandise_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

impl CreateOrderItemParams {
    pub fn from_dto(dto: OrderItemPayloadDto) -> Result<Self, ValidationError> {
        let (Some(order_id), Some(merchandise_id), Some(quantity), Some(unit_price)) = (
            present_value(dto.order_id),
            present_value(dto.merchandise_id),
            present_value(dto.quantity),
            present_value(dto.unit_price),
        ) else {
            return Err(ValidationError::MissingFields(
                "order_id, merchandise_id, quantity, unit_price".to_string(),
            ));
        };

        Ok(Self {
            order_id: parse_int("order_id", &order_id)?,
            merchandise_id: parse_int("merchandise_id", &merchandise_id)?,
            quantity: parse_count("quantity", &quantity)?,
            unit_price: parse_float("unit_price", &unit_price)?,
        })
    }

    pub fn total(&self) -> f64 {
        line_total(self.quantity, self.unit_price)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOrderItemParams {
    pub merchandise_id: Option<i32>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
}

impl UpdateOrderItemParams {
    pub fn from_dto(dto: OrderItemPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            merchandise_id: optional_id("merchandise_id", dto.merchandise_id)?,
            quantity: optional_count("quantity", dto.quantity)?,
            unit_price: optional_float("unit_price", dto.unit_price)?,
        })
    }
}
