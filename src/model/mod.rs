//! Request and response shapes shared by the HTTP layer and its clients.
//!
//! Payload DTOs keep every field optional so one shape serves both create and partial edit;
//! the server converts them into validated parameter types before touching the database.

pub mod api;
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
