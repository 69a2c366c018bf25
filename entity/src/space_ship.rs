//! `SeaORM` entity for the `space_ship` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "space_ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub value: f64,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::armament::Entity")]
    Armament,
}

impl Related<super::armament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Armament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
