use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::spaceship::{ArmamentDraft, SpaceShipDraft, SpaceShipFilter, SpaceShipRecord};

/// Narrow persistence contract for spaceship storage.
///
/// The service layer depends on this trait so that storage can be swapped or
/// mocked in tests. A missing row is an empty result (`Ok(None)` or a zero-row
/// write), never an error: only genuine query failures surface as [`DbErr`].
#[async_trait]
pub trait SpaceShipStore {
    async fn insert(&self, draft: SpaceShipDraft) -> Result<(), DbErr>;
    async fn get_by_id(&self, id: i64) -> Result<Option<SpaceShipRecord>, DbErr>;
    async fn update(&self, id: i64, draft: SpaceShipDraft) -> Result<(), DbErr>;
    async fn delete(&self, id: i64) -> Result<(), DbErr>;
    async fn get_all(
        &self,
        filter: SpaceShipFilter,
    ) -> Result<Vec<entity::space_ship::Model>, DbErr>;
    async fn delete_armaments(&self, space_ship_id: i64) -> Result<(), DbErr>;
}

pub struct SpaceShipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceShipRepository<'a> {
    /// Creates a new instance of [`SpaceShipRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Inserts the draft's armament rows for a ship inside an open transaction.
async fn insert_armaments(
    txn: &DatabaseTransaction,
    space_ship_id: i64,
    armaments: Vec<ArmamentDraft>,
    now: chrono::NaiveDateTime,
) -> Result<(), DbErr> {
    for armament in armaments {
        let armament = entity::armament::ActiveModel {
            title: ActiveValue::Set(armament.title),
            qty: ActiveValue::Set(armament.qty),
            space_ship_id: ActiveValue::Set(space_ship_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        armament.insert(txn).await?;
    }

    Ok(())
}

#[async_trait]
impl<'a> SpaceShipStore for SpaceShipRepository<'a> {
    /// Persists a ship and its armaments in one database transaction
    async fn insert(&self, draft: SpaceShipDraft) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        let ship = entity::space_ship::ActiveModel {
            name: ActiveValue::Set(draft.name),
            class: ActiveValue::Set(draft.class),
            crew: ActiveValue::Set(draft.crew),
            image: ActiveValue::Set(draft.image),
            value: ActiveValue::Set(draft.value),
            status: ActiveValue::Set(draft.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let ship = ship.insert(&txn).await?;
        insert_armaments(&txn, ship.id, draft.armaments, now).await?;

        txn.commit().await
    }

    /// Fetches a non-deleted ship with its armaments loaded in id order.
    ///
    /// Returns `Ok(None)` when no matching row exists; row absence is not an
    /// error at this layer.
    async fn get_by_id(&self, id: i64) -> Result<Option<SpaceShipRecord>, DbErr> {
        let ship = entity::prelude::SpaceShip::find()
            .filter(entity::space_ship::Column::Id.eq(id))
            .filter(entity::space_ship::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        let Some(ship) = ship else {
            return Ok(None);
        };

        let armaments = entity::prelude::Armament::find()
            .filter(entity::armament::Column::SpaceShipId.eq(ship.id))
            .filter(entity::armament::Column::DeletedAt.is_null())
            .order_by_asc(entity::armament::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(SpaceShipRecord { ship, armaments }))
    }

    /// Overwrites the live row's fields with the draft's non-zero fields and
    /// inserts the draft's armaments, in one transaction.
    ///
    /// Empty strings and zero numbers in the draft leave the stored values
    /// untouched. A missing row is a no-op success; the service has already
    /// performed the existence check.
    async fn update(&self, id: i64, draft: SpaceShipDraft) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::SpaceShip::find()
            .filter(entity::space_ship::Column::Id.eq(id))
            .filter(entity::space_ship::Column::DeletedAt.is_null())
            .one(&txn)
            .await?;

        let Some(existing) = existing else {
            return txn.commit().await;
        };

        let now = Utc::now().naive_utc();
        let mut live: entity::space_ship::ActiveModel = existing.into();

        if !draft.name.is_empty() {
            live.name = ActiveValue::Set(draft.name);
        }
        if !draft.class.is_empty() {
            live.class = ActiveValue::Set(draft.class);
        }
        if draft.crew != 0 {
            live.crew = ActiveValue::Set(draft.crew);
        }
        if !draft.image.is_empty() {
            live.image = ActiveValue::Set(draft.image);
        }
        if draft.value != 0.0 {
            live.value = ActiveValue::Set(draft.value);
        }
        if !draft.status.is_empty() {
            live.status = ActiveValue::Set(draft.status);
        }
        live.updated_at = ActiveValue::Set(now);

        live.update(&txn).await?;
        insert_armaments(&txn, id, draft.armaments, now).await?;

        txn.commit().await
    }

    /// Soft-deletes the matching non-deleted ship; zero matching rows is success
    async fn delete(&self, id: i64) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::SpaceShip::update_many()
            .col_expr(entity::space_ship::Column::DeletedAt, Expr::value(now))
            .filter(entity::space_ship::Column::Id.eq(id))
            .filter(entity::space_ship::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists non-deleted ships matching the filter, in id order.
    ///
    /// The name is matched as a substring (an empty name matches everything);
    /// class and status are exact matches applied only when non-empty.
    async fn get_all(
        &self,
        filter: SpaceShipFilter,
    ) -> Result<Vec<entity::space_ship::Model>, DbErr> {
        let mut query = entity::prelude::SpaceShip::find()
            .filter(entity::space_ship::Column::DeletedAt.is_null())
            .filter(entity::space_ship::Column::Name.contains(&filter.name));

        if !filter.class.is_empty() {
            query = query.filter(entity::space_ship::Column::Class.eq(&filter.class));
        }

        if !filter.status.is_empty() {
            query = query.filter(entity::space_ship::Column::Status.eq(&filter.status));
        }

        query
            .order_by_asc(entity::space_ship::Column::Id)
            .all(self.db)
            .await
    }

    /// Soft-deletes all non-deleted armaments of a ship; zero rows is success
    async fn delete_armaments(&self, space_ship_id: i64) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Armament::update_many()
            .col_expr(entity::armament::Column::DeletedAt, Expr::value(now))
            .filter(entity::armament::Column::SpaceShipId.eq(space_ship_id))
            .filter(entity::armament::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
