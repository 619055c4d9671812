//! Contact message data repository

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::contact::{Contact, CreateContactParams, UpdateContactParams};

pub struct ContactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a contact message stamped with the current UTC time
    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, DbErr> {
        let contact = entity::contact::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            message: ActiveValue::Set(params.message),
            date: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Contact::from_entity(contact))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, DbErr> {
        Ok(entity::prelude::Contact::find_by_id(id)
            .one(self.db)
            .await?
            .map(Contact::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Contact>, DbErr> {
        Ok(entity::prelude::Contact::find()
            .order_by_asc(entity::contact::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Contact::from_entity)
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdateContactParams) -> Result<Contact, DbErr> {
        let contact = entity::prelude::Contact::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Contact with id {} not found",
                id
            )))?;

        let mut active = contact.clone().into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(message) = params.message {
            active.message = ActiveValue::Set(message);
        }
        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(Some(user_id));
        }

        if !active.is_changed() {
            return Ok(Contact::from_entity(contact));
        }

        Ok(Contact::from_entity(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contact::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
