//! Business logic layer.
//!
//! Services sit between controllers and repositories. Every mutation opens one
//! transaction, hands it to the repositories and commits at the end; any early return
//! drops the transaction, which rolls it back. Reads use the pool directly.
//!
//! Lookups that may miss return `Ok(None)` so controllers decide the 404 message.

pub mod auth;
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

#[cfg(test)]
mod test;
