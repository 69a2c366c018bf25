pub use sea_orm_migration::prelude::*;

mod m20260801_000001_space_ship;
mod m20260801_000002_armament;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_space_ship::Migration),
            Box::new(m20260801_000002_armament::Migration),
        ]
    }
}
