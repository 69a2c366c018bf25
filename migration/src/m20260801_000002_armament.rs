use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_space_ship::SpaceShip;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Armament::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Armament::Id))
                    .col(string(Armament::Title))
                    .col(integer(Armament::Qty))
                    .col(big_integer(Armament::SpaceShipId))
                    .col(timestamp(Armament::CreatedAt))
                    .col(timestamp(Armament::UpdatedAt))
                    .col(timestamp_null(Armament::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_armament_space_ship_id")
                            .from(Armament::Table, Armament::SpaceShipId)
                            .to(SpaceShip::Table, SpaceShip::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Armament::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Armament {
    Table,
    Id,
    Title,
    Qty,
    SpaceShipId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
