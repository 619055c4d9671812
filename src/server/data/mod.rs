//! Data access layer.
//!
//! One repository per entity. Repositories borrow any `ConnectionTrait` implementor, so
//! the same code runs against the pool for reads and against a `DatabaseTransaction`
//! inside service mutations. Entity models are converted into domain models before they
//! leave this layer.

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
