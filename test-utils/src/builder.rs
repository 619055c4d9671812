use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Event, Ticket};
///
/// let test = TestBuilder::new()
///     .with_table(Event)
///     .with_table(Ticket)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of `entity`. Tables with foreign keys go after the tables they
    /// reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the squad and player statistic tables.
    pub fn with_squad_tables(self) -> Self {
        self.with_table(Squad).with_table(PlayerStatistic)
    }

    /// Adds the event and ticket tables.
    pub fn with_event_tables(self) -> Self {
        self.with_table(Event).with_table(Ticket)
    }

    /// Adds merchandise, orders and order items. Add `User` first.
    pub fn with_order_tables(self) -> Self {
        self.with_table(Merchandise)
            .with_table(Order)
            .with_table(OrderItem)
    }

    /// Adds every table of the club schema in dependency order.
    ///
    /// Use this for router-level tests that exercise several resources.
    pub fn with_club_tables(self) -> Self {
        self.with_table(User)
            .with_table(Contact)
            .with_table(Donation)
            .with_squad_tables()
            .with_event_tables()
            .with_order_tables()
    }

    /// Opens the database and creates the registered tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
