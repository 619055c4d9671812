use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::donation::DonationRepository,
    error::AppError,
    model::donation::{CreateDonationParams, Donation, UpdateDonationParams},
};

pub struct DonationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a donation; an unknown `user_id` fails on the foreign key
    pub async fn create(&self, params: CreateDonationParams) -> Result<Donation, AppError> {
        let txn = self.db.begin().await?;

        let donation = DonationRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(donation)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Donation>, AppError> {
        Ok(DonationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Donation>, AppError> {
        Ok(DonationRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateDonationParams,
    ) -> Result<Option<Donation>, AppError> {
        let txn = self.db.begin().await?;
        let donation_repo = DonationRepository::new(&txn);

        if donation_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let donation = donation_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(donation))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = DonationRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
