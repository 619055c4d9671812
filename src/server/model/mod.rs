//! Domain models and operation parameters.
//!
//! Each module defines the domain model converted from its SeaORM entity, the conversion
//! into the outward DTO, and the validated parameter types services accept. Parameter
//! types are built from payload DTOs through `from_dto`, which is where field-level
//! validation happens.

pub mod contact;
pub mod donation;
pub mod event;
pub mod merchandise;
pub mod order;
pub mod order_item;
pub mod player_statistic;
pub mod squad;
pub mod ticket;
pub mod user;
