//! Donation data repository

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::donation::{CreateDonationParams, Donation, UpdateDonationParams};

pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a donation stamped with the current UTC time
    pub async fn create(&self, params: CreateDonationParams) -> Result<Donation, DbErr> {
        let donation = entity::donation::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            amount: ActiveValue::Set(params.amount),
            donation_date: ActiveValue::Set(Utc::now().naive_utc()),
            message: ActiveValue::Set(params.message),
            name: ActiveValue::Set(params.name),
            contact: ActiveValue::Set(params.contact),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Donation::from_entity(donation))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Donation>, DbErr> {
        Ok(entity::prelude::Donation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Donation::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Donation>, DbErr> {
        Ok(entity::prelude::Donation::find()
            .order_by_asc(entity::donation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Donation::from_entity)
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdateDonationParams) -> Result<Donation, DbErr> {
        let donation = entity::prelude::Donation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Donation with id {} not found",
                id
            )))?;

        let mut active = donation.clone().into_active_model();
        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }
        if let Some(amount) = params.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(message) = params.message {
            active.message = ActiveValue::Set(Some(message));
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(contact) = params.contact {
            active.contact = ActiveValue::Set(Some(contact));
        }

        if !active.is_changed() {
            return Ok(Donation::from_entity(donation));
        }

        Ok(Donation::from_entity(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Donation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
