//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{Database, DatabaseConnection};

use crate::{error::TestError, fixtures};

/// Handle to a fully initialized test environment.
///
/// Wraps an in-memory SQLite database and offers fixture helpers for
/// inserting mock fleet data. Create it via
/// [`TestBuilder`](crate::TestBuilder) rather than directly.
pub struct TestContext {
    /// Database connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Convert the database connection into any state type built from it.
    ///
    /// This allows conversion to the application's state struct without a
    /// dependency from this crate back onto the service crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Inserts a mock ship with standard crew, image, and value fields
    pub async fn insert_ship(
        &self,
        name: &str,
        class: &str,
        status: &str,
    ) -> Result<entity::space_ship::Model, TestError> {
        Ok(fixtures::insert_mock_ship(&self.db, name, class, status).await?)
    }

    /// Inserts a mock armament row for an existing ship
    pub async fn insert_armament(
        &self,
        space_ship_id: i64,
        title: &str,
        qty: i32,
    ) -> Result<entity::armament::Model, TestError> {
        Ok(fixtures::insert_mock_armament(&self.db, space_ship_id, title, qty).await?)
    }
}
