//! Event data repository

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            location: ActiveValue::Set(params.location),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(event))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        Ok(entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        Ok(entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Event, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event with id {} not found", id)))?;

        let mut active = event.clone().into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(location);
        }

        if !active.is_changed() {
            return Ok(Event::from_entity(event));
        }

        Ok(Event::from_entity(active.update(self.db).await?))
    }

    /// Deletes an event; its tickets follow through the cascading foreign key
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
