//! Squad data repository
//!
//! Provides the `SquadRepository` for managing squad players. Deleting a player through
//! this repository removes only the squad row; callers remove statistics first.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::squad::{CreateSquadParams, Squad, UpdateSquadParams};

/// Repository providing database operations for squad players.
pub struct SquadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SquadRepository<'a, C> {
    /// Creates a new SquadRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new squad player
    ///
    /// # Returns
    /// - `Ok(Squad)` - The created player
    /// - `Err(DbErr)` - Database error, including duplicate jersey numbers
    pub async fn create(&self, params: CreateSquadParams) -> Result<Squad, DbErr> {
        let squad = entity::squad::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            position: ActiveValue::Set(params.position),
            jersey_number: ActiveValue::Set(params.jersey_number),
            biography: ActiveValue::Set(params.biography),
            image: ActiveValue::Set(params.image),
            weight: ActiveValue::Set(params.weight),
            height: ActiveValue::Set(params.height),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Squad::from_entity(squad))
    }

    /// Finds a squad player by ID
    ///
    /// # Returns
    /// - `Ok(Some(Squad))` - The player exists
    /// - `Ok(None)` - No player with that ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Squad>, DbErr> {
        Ok(entity::prelude::Squad::find_by_id(id)
            .one(self.db)
            .await?
            .map(Squad::from_entity))
    }

    /// Gets all squad players ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Squad>, DbErr> {
        Ok(entity::prelude::Squad::find()
            .order_by_asc(entity::squad::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Squad::from_entity)
            .collect())
    }

    /// Updates the present fields of a squad player
    ///
    /// # Returns
    /// - `Ok(Squad)` - The updated player
    /// - `Err(DbErr::RecordNotFound)` - No player with that ID
    pub async fn update(&self, id: i32, params: UpdateSquadParams) -> Result<Squad, DbErr> {
        let squad = entity::prelude::Squad::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Squad with id {} not found", id)))?;

        let mut active = squad.clone().into_active_model();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(position) = params.position {
            active.position = ActiveValue::Set(position);
        }
        if let Some(jersey_number) = params.jersey_number {
            active.jersey_number = ActiveValue::Set(jersey_number);
        }
        if let Some(biography) = params.biography {
            active.biography = ActiveValue::Set(biography);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(weight) = params.weight {
            active.weight = ActiveValue::Set(Some(weight));
        }
        if let Some(height) = params.height {
            active.height = ActiveValue::Set(Some(height));
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }

        if !active.is_changed() {
            return Ok(Squad::from_entity(squad));
        }

        Ok(Squad::from_entity(active.update(self.db).await?))
    }

    /// Deletes the squad player of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The player was deleted
    /// - `Ok(false)` - No player with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Squad::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
