use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{player_statistic::PlayerStatisticRepository, squad::SquadRepository},
    error::AppError,
    model::squad::{CreateSquadParams, Squad, UpdateSquadParams},
};

pub struct SquadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SquadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSquadParams) -> Result<Squad, AppError> {
        let txn = self.db.begin().await?;

        let squad = SquadRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(squad)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Squad>, AppError> {
        Ok(SquadRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Squad>, AppError> {
        Ok(SquadRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateSquadParams,
    ) -> Result<Option<Squad>, AppError> {
        let txn = self.db.begin().await?;
        let squad_repo = SquadRepository::new(&txn);

        if squad_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let squad = squad_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(squad))
    }

    /// Deletes a squad player together with all of their statistics
    ///
    /// # Returns
    /// - `Ok(true)` - Player and statistics deleted
    /// - `Ok(false)` - No player with that ID, nothing changed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let squad_repo = SquadRepository::new(&txn);

        if squad_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let removed = PlayerStatisticRepository::new(&txn)
            .delete_by_squad_id(id)
            .await?;
        squad_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted squad {} and {} statistic rows", id, removed);

        Ok(true)
    }
}
