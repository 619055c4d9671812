use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event, UpdateEventParams},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(event)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<Option<Event>, AppError> {
        let txn = self.db.begin().await?;
        let event_repo = EventRepository::new(&txn);

        if event_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let event = event_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(event))
    }

    /// Deletes an event; fails on the foreign key while tickets still reference it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = EventRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
