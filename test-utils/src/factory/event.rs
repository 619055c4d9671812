//! Event and ticket factories.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default kick-off used by event factories: 2025-06-01 15:00:00.
pub fn default_event_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(15, 0, 0))
        .unwrap_or_default()
}

/// Creates an event named `"Event {id}"` at the default date.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    let id = next_id();
    entity::event::ActiveModel {
        name: ActiveValue::Set(format!("Event {}", id)),
        description: ActiveValue::Set("Season opener".to_string()),
        date: ActiveValue::Set(default_event_date()),
        location: ActiveValue::Set("Home ground".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a ticket for the given event priced at 25.0.
pub async fn create_ticket(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        price: ActiveValue::Set(25.0),
        section: ActiveValue::Set("North".to_string()),
        row: ActiveValue::Set("A".to_string()),
        seat: ActiveValue::Set("12".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
