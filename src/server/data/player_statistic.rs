//! Player statistic data repository
//!
//! Besides single-row operations this repository offers squad-scoped bulk reads, edits
//! and deletes. Bulk operations are meant to run inside a transaction so they apply to
//! every row of the squad or to none.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::player_statistic::{
    CreatePlayerStatisticParams, PlayerStatistic, UpdatePlayerStatisticParams,
};

pub struct PlayerStatisticRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerStatisticRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreatePlayerStatisticParams,
    ) -> Result<PlayerStatistic, DbErr> {
        let statistic = entity::player_statistic::ActiveModel {
            squad_id: ActiveValue::Set(params.squad_id),
            matches_played: ActiveValue::Set(params.matches_played),
            tries_scored: ActiveValue::Set(params.tries_scored),
            conversions: ActiveValue::Set(params.conversions),
            penalties: ActiveValue::Set(params.penalties),
            yellow_cards: ActiveValue::Set(params.yellow_cards),
            red_cards: ActiveValue::Set(params.red_cards),
            minutes_played: ActiveValue::Set(params.minutes_played),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlayerStatistic::from_entity(statistic))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PlayerStatistic>, DbErr> {
        Ok(entity::prelude::PlayerStatistic::find_by_id(id)
            .one(self.db)
            .await?
            .map(PlayerStatistic::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerStatistic>, DbErr> {
        Ok(entity::prelude::PlayerStatistic::find()
            .order_by_asc(entity::player_statistic::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerStatistic::from_entity)
            .collect())
    }

    /// Gets every statistic row of a squad player ordered by ID
    pub async fn get_by_squad_id(&self, squad_id: i32) -> Result<Vec<PlayerStatistic>, DbErr> {
        Ok(entity::prelude::PlayerStatistic::find()
            .filter(entity::player_statistic::Column::SquadId.eq(squad_id))
            .order_by_asc(entity::player_statistic::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerStatistic::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlayerStatisticParams,
    ) -> Result<PlayerStatistic, DbErr> {
        let statistic = entity::prelude::PlayerStatistic::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Player statistic with id {} not found",
                id
            )))?;

        self.apply_update(statistic, &params).await
    }

    /// Applies the same counter changes to every statistic row of a squad player
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerStatistic>)` - The updated rows, empty if the squad has none
    pub async fn update_by_squad_id(
        &self,
        squad_id: i32,
        params: UpdatePlayerStatisticParams,
    ) -> Result<Vec<PlayerStatistic>, DbErr> {
        let statistics = entity::prelude::PlayerStatistic::find()
            .filter(entity::player_statistic::Column::SquadId.eq(squad_id))
            .order_by_asc(entity::player_statistic::Column::Id)
            .all(self.db)
            .await?;

        let mut updated = Vec::with_capacity(statistics.len());
        for statistic in statistics {
            updated.push(self.apply_update(statistic, &params).await?);
        }

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlayerStatistic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every statistic row of a squad player
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_by_squad_id(&self, squad_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerStatistic::delete_many()
            .filter(entity::player_statistic::Column::SquadId.eq(squad_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn apply_update(
        &self,
        statistic: entity::player_statistic::Model,
        params: &UpdatePlayerStatisticParams,
    ) -> Result<PlayerStatistic, DbErr> {
        let mut active = statistic.clone().into_active_model();
        if let Some(value) = params.matches_played {
            active.matches_played = ActiveValue::Set(value);
        }
        if let Some(value) = params.tries_scored {
            active.tries_scored = ActiveValue::Set(value);
        }
        if let Some(value) = params.conversions {
            active.conversions = ActiveValue::Set(value);
        }
        if let Some(value) = params.penalties {
            active.penalties = ActiveValue::Set(value);
        }
        if let Some(value) = params.yellow_cards {
            active.yellow_cards = ActiveValue::Set(value);
        }
        if let Some(value) = params.red_cards {
            active.red_cards = ActiveValue::Set(value);
        }
        if let Some(value) = params.minutes_played {
            active.minutes_played = ActiveValue::Set(value);
        }

        if !active.is_changed() {
            return Ok(PlayerStatistic::from_entity(statistic));
        }

        Ok(PlayerStatistic::from_entity(active.update(self.db).await?))
    }
}
