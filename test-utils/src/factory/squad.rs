//! Squad and player statistic factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test squad players with customizable fields.
pub struct SquadFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    jersey_number: String,
    weight: Option<f64>,
}

impl<'a> SquadFactory<'a> {
    /// Creates a new SquadFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Player"`
    /// - jersey_number: `"{id}"` where id is auto-incremented
    /// - weight: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Player".to_string(),
            jersey_number: id.to_string(),
            weight: None,
        }
    }

    /// Sets the first name of the player.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the jersey number of the player.
    pub fn jersey_number(mut self, jersey_number: impl Into<String>) -> Self {
        self.jersey_number = jersey_number.into();
        self
    }

    /// Sets the weight of the player.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builds and inserts the squad entity into the database.
    pub async fn build(self) -> Result<entity::squad::Model, DbErr> {
        entity::squad::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set("Tester".to_string()),
            position: ActiveValue::Set("Flanker".to_string()),
            jersey_number: ActiveValue::Set(self.jersey_number),
            biography: ActiveValue::Set("Test biography".to_string()),
            image: ActiveValue::Set("player.png".to_string()),
            weight: ActiveValue::Set(self.weight),
            height: ActiveValue::Set(None),
            date_of_birth: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a squad player with default values.
pub async fn create_squad(db: &DatabaseConnection) -> Result<entity::squad::Model, DbErr> {
    SquadFactory::new(db).build().await
}

/// Creates a statistic row for the given squad with `matches_played` set and every other
/// counter at zero.
pub async fn create_player_statistic(
    db: &DatabaseConnection,
    squad_id: i32,
    matches_played: i32,
) -> Result<entity::player_statistic::Model, DbErr> {
    entity::player_statistic::ActiveModel {
        squad_id: ActiveValue::Set(squad_id),
        matches_played: ActiveValue::Set(matches_played),
        tries_scored: ActiveValue::Set(0),
        conversions: ActiveValue::Set(0),
        penalties: ActiveValue::Set(0),
        yellow_cards: ActiveValue::Set(0),
        red_cards: ActiveValue::Set(0),
        minutes_played: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
