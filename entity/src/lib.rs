//! SeaORM entity models for the club database.
//!
//! Each module maps one table. Relations are declared through explicit foreign-key
//! columns; parents never hold owning references to their children.

pub mod prelude;

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
