use crate::{
    data::spaceship::SpaceShipStore,
    error::Error,
    model::spaceship::{SpaceShipDraft, SpaceShipFilter, SpaceShipRecord},
};

/// Domain service for spaceship operations.
///
/// Generic over the store so tests can substitute a mock for the SeaORM
/// repository. Existence policy lives here: the store reports a missing row
/// as an empty result, and this service turns that into [`Error::NotFound`]
/// before any mutation is allowed to proceed.
pub struct SpaceShipService<S> {
    store: S,
}

impl<S: SpaceShipStore> SpaceShipService<S> {
    /// Creates a new instance of [`SpaceShipService`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists a new ship with its armaments
    pub async fn create(&self, draft: SpaceShipDraft) -> Result<(), Error> {
        self.store.insert(draft).await?;

        Ok(())
    }

    /// Fetches a ship by id, failing when it does not exist
    pub async fn get_by_id(&self, id: i64) -> Result<SpaceShipRecord, Error> {
        match self.store.get_by_id(id).await? {
            Some(record) => Ok(record),
            None => Err(Error::NotFound(id)),
        }
    }

    /// Replaces a ship's fields and armament set.
    ///
    /// Runs strictly as existence check, then armament wipe, then field
    /// update; the first failing step aborts the rest. The wipe plus the
    /// update are separate storage calls, so a failure in between leaves the
    /// armaments deleted while the ship row keeps its old fields.
    pub async fn update(&self, id: i64, draft: SpaceShipDraft) -> Result<(), Error> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound(id));
        }

        self.store.delete_armaments(id).await?;
        self.store.update(id, draft).await?;

        Ok(())
    }

    /// Soft-deletes a ship, failing when it does not exist
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound(id));
        }

        self.store.delete(id).await?;

        Ok(())
    }

    /// Lists ships matching the filter; empty filter fields are wildcards
    pub async fn get_all(
        &self,
        filter: SpaceShipFilter,
    ) -> Result<Vec<entity::space_ship::Model>, Error> {
        Ok(self.store.get_all(filter).await?)
    }
}
