use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::contact::{Contact, CreateContactParams, UpdateContactParams},
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, AppError> {
        let txn = self.db.begin().await?;

        let contact = ContactRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(contact)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateContactParams,
    ) -> Result<Option<Contact>, AppError> {
        let txn = self.db.begin().await?;
        let contact_repo = ContactRepository::new(&txn);

        if contact_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let contact = contact_repo.update(id, params).await?;

        txn.commit().await?;

        Ok(Some(contact))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = ContactRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
