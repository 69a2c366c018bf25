//! Mock fleet data for tests.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factories building entity active models with standard mock field values.
pub mod factory {
    use chrono::Utc;
    use sea_orm::ActiveValue;

    /// Mock ship with a standard crew, image, and value
    pub fn ship(name: &str, class: &str, status: &str) -> entity::space_ship::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::space_ship::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            class: ActiveValue::Set(class.to_string()),
            crew: ActiveValue::Set(1200),
            image: ActiveValue::Set("https://test".to_string()),
            value: ActiveValue::Set(100.99),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Mock armament for an existing ship
    pub fn armament(
        space_ship_id: i64,
        title: &str,
        qty: i32,
    ) -> entity::armament::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::armament::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            qty: ActiveValue::Set(qty),
            space_ship_id: ActiveValue::Set(space_ship_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

/// Inserts a mock ship row
pub async fn insert_mock_ship(
    db: &DatabaseConnection,
    name: &str,
    class: &str,
    status: &str,
) -> Result<entity::space_ship::Model, DbErr> {
    factory::ship(name, class, status).insert(db).await
}

/// Inserts a mock armament row for an existing ship
pub async fn insert_mock_armament(
    db: &DatabaseConnection,
    space_ship_id: i64,
    title: &str,
    qty: i32,
) -> Result<entity::armament::Model, DbErr> {
    factory::armament(space_ship_id, title, qty).insert(db).await
}
