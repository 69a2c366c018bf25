//! Declarative test environment setup.
//!
//! The [`TestBuilder`] queues schema configuration and executes it during the
//! final `build()` call, returning a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_fleet_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_fleet_tables: false,
        }
    }

    /// Add the fleet tables (SpaceShip and Armament) to the test database
    pub fn with_fleet_tables(mut self) -> Self {
        self.include_fleet_tables = true;
        self
    }

    /// Add a custom entity table to the test database
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to an in-memory SQLite database and create the configured tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut tables = Vec::new();

        if self.include_fleet_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::SpaceShip));
            tables.push(schema.create_table_from_entity(entity::prelude::Armament));
        }

        tables.extend(self.tables);

        for stmt in tables {
            context.db.execute(&stmt).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
