//! `SeaORM` entity for the `armament` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "armament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub qty: i32,
    pub space_ship_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::space_ship::Entity",
        from = "Column::SpaceShipId",
        to = "super::space_ship::Column::Id"
    )]
    SpaceShip,
}

impl Related<super::space_ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceShip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
