use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::merchandise::MerchandiseRepository,
    error::AppError,
    model::merchandise::{CreateMerchandiseParams, Merchandise, UpdateMerchandiseParams},
};

pub struct MerchandiseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MerchandiseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMerchandiseParams) -> Result<Merchandise, AppError> {
        let txn = self.db.begin().await?;

        let merchandise = MerchandiseRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(merchandise)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Merchandise>, AppError> {
        Ok(MerchandiseRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Merchandise>, AppError> {
        Ok(MerchandiseRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMerchandiseParams,
    ) -> Result<Option<Merchandise>, AppError> {
        let txn = self.db.begin().await?;
        let merchandise_repo = MerchandiseRepository::new(&txn);

        if merchandise_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let merchandise = merchandise_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(merchandise))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = MerchandiseRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
