use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and opens a fresh database holding them.
///
/// Foreign keys are enforced by SQLite, so tables are created in the order they are
/// added and a table must come after every table it references. The preset methods
/// already respect that order.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Company)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the CREATE TABLE statement SeaORM derives for `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Users, companies and cars. Enough for listing and search tests.
    pub fn with_car_tables(self) -> Self {
        self.with_table(User).with_table(Company).with_table(Car)
    }

    /// The whole rental schema: `with_car_tables()` plus orders, order items and ratings.
    ///
    /// The composite unique index on ratings lives in the migration only, so duplicate
    /// ratings are not rejected by this schema.
    pub fn with_rental_tables(self) -> Self {
        self.with_car_tables()
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Rating)
    }

    /// Opens the in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the connection ready
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
