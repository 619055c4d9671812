use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{event::EventRepository, ticket::TicketRepository},
    error::AppError,
    model::ticket::{CreateTicketParams, Ticket, UpdateTicketParams},
};

const EVENT_NOT_FOUND: &str = "Event not found";

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ticket for an existing event
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(AppError::NotFound)` - The event does not exist
    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, AppError> {
        let txn = self.db.begin().await?;

        if EventRepository::new(&txn)
            .find_by_id(params.event_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        let ticket = TicketRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(ticket)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial edit; moving a ticket requires the target event to exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTicketParams,
    ) -> Result<Option<Ticket>, AppError> {
        let txn = self.db.begin().await?;
        let ticket_repo = TicketRepository::new(&txn);

        if ticket_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(event_id) = params.event_id {
            if EventRepository::new(&txn).find_by_id(event_id).await?.is_none() {
                return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
            }
        }

        let ticket = ticket_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(ticket))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = TicketRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
