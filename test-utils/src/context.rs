use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Database handle of a single test.
///
/// The in-memory database lives as long as the connection, so dropping the context
/// discards every row the test wrote.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the test database, `None` until first requested.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening a fresh in-memory database on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect(IN_MEMORY_URL).await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the given `CREATE TABLE` statements in order.
    ///
    /// Parents must precede children so foreign keys resolve; `TestBuilder` keeps that
    /// order for the table groups it knows about.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}
