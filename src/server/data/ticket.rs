//! Ticket data repository

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::ticket::{CreateTicketParams, Ticket, UpdateTicketParams};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            price: ActiveValue::Set(params.price),
            section: ActiveValue::Set(params.section),
            row: ActiveValue::Set(params.row),
            seat: ActiveValue::Set(params.seat),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(ticket))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, DbErr> {
        Ok(entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .map(Ticket::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Ticket>, DbErr> {
        Ok(entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdateTicketParams) -> Result<Ticket, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Ticket with id {} not found", id)))?;

        let mut active = ticket.clone().into_active_model();
        if let Some(event_id) = params.event_id {
            active.event_id = ActiveValue::Set(event_id);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(section) = params.section {
            active.section = ActiveValue::Set(section);
        }
        if let Some(row) = params.row {
            active.row = ActiveValue::Set(row);
        }
        if let Some(seat) = params.seat {
            active.seat = ActiveValue::Set(seat);
        }

        if !active.is_changed() {
            return Ok(Ticket::from_entity(ticket));
        }

        Ok(Ticket::from_entity(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
