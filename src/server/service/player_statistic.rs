use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{player_statistic::PlayerStatisticRepository, squad::SquadRepository},
    error::AppError,
    model::player_statistic::{
        CreatePlayerStatisticParams, PlayerStatistic, UpdatePlayerStatisticParams,
    },
};

const SQUAD_NOT_FOUND: &str = "Squad not found";
const NO_STATISTICS: &str = "No player statistics found for this squad";

pub struct PlayerStatisticService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerStatisticService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a statistic row for an existing squad player
    ///
    /// # Returns
    /// - `Ok(PlayerStatistic)` - The created row
    /// - `Err(AppError::NotFound)` - The squad player does not exist
    pub async fn create(
        &self,
        params: CreatePlayerStatisticParams,
    ) -> Result<PlayerStatistic, AppError> {
        let txn = self.db.begin().await?;

        if SquadRepository::new(&txn)
            .find_by_id(params.squad_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(SQUAD_NOT_FOUND.to_string()));
        }

        let statistic = PlayerStatisticRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(statistic)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlayerStatistic>, AppError> {
        Ok(PlayerStatisticRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerStatistic>, AppError> {
        Ok(PlayerStatisticRepository::new(self.db).get_all().await?)
    }

    /// Gets the statistics of a squad player
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerStatistic>)` - At least one row
    /// - `Err(AppError::NotFound)` - Squad missing, or it has no statistics
    pub async fn get_by_squad(&self, squad_id: i32) -> Result<Vec<PlayerStatistic>, AppError> {
        if SquadRepository::new(self.db)
            .find_by_id(squad_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(SQUAD_NOT_FOUND.to_string()));
        }

        let statistics = PlayerStatisticRepository::new(self.db)
            .get_by_squad_id(squad_id)
            .await?;
        if statistics.is_empty() {
            return Err(AppError::NotFound(NO_STATISTICS.to_string()));
        }

        Ok(statistics)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlayerStatisticParams,
    ) -> Result<Option<PlayerStatistic>, AppError> {
        let txn = self.db.begin().await?;
        let statistic_repo = PlayerStatisticRepository::new(&txn);

        if statistic_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let statistic = statistic_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(statistic))
    }

    /// Applies the same counter edit to every statistic row of a squad player
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerStatistic>)` - The updated rows
    /// - `Err(AppError::NotFound)` - Squad missing, or it has no statistics
    pub async fn update_by_squad(
        &self,
        squad_id: i32,
        params: UpdatePlayerStatisticParams,
    ) -> Result<Vec<PlayerStatistic>, AppError> {
        let txn = self.db.begin().await?;

        if SquadRepository::new(&txn)
            .find_by_id(squad_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(SQUAD_NOT_FOUND.to_string()));
        }

        let statistics = PlayerStatisticRepository::new(&txn)
            .update_by_squad_id(squad_id, params)
            .await?;
        if statistics.is_empty() {
            return Err(AppError::NotFound(NO_STATISTICS.to_string()));
        }

        txn.commit().await?;

        Ok(statistics)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = PlayerStatisticRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    /// Deletes every statistic row of a squad player
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, at least one
    /// - `Err(AppError::NotFound)` - Squad missing, or it has no statistics
    pub async fn delete_by_squad(&self, squad_id: i32) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        if SquadRepository::new(&txn)
            .find_by_id(squad_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(SQUAD_NOT_FOUND.to_string()));
        }

        let removed = PlayerStatisticRepository::new(&txn)
            .delete_by_squad_id(squad_id)
            .await?;
        if removed == 0 {
            return Err(AppError::NotFound(NO_STATISTICS.to_string()));
        }

        txn.commit().await?;

        Ok(removed)
    }
}
