use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpaceShip::Table)
                    .if_not_exists()
                    .col(big_pk_auto(SpaceShip::Id))
                    .col(string(SpaceShip::Name))
                    .col(string(SpaceShip::Class))
                    .col(big_integer(SpaceShip::Crew))
                    .col(string(SpaceShip::Image))
                    .col(double(SpaceShip::Value))
                    .col(string(SpaceShip::Status))
                    .col(timestamp(SpaceShip::CreatedAt))
                    .col(timestamp(SpaceShip::UpdatedAt))
                    .col(timestamp_null(SpaceShip::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaceShip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpaceShip {
    Table,
    Id,
    Name,
    Class,
    Crew,
    Image,
    Value,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
