use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::auth::Permission,
    model::user::{UpdateUserParams, User},
    service::auth::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial edit to an account
    ///
    /// Users may edit themselves, admins may edit anyone. Changing a role requires admin.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller may not make this change
    /// - `Err(AppError::ValidationErr(EmailTaken))` - New email belongs to another account
    pub async fn update(
        &self,
        id: i32,
        caller: &User,
        params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(target) = user_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Permission::OwnerOrAdmin(target.id).check(caller)?;

        if params.role.is_some_and(|role| role != target.role) && !caller.is_admin() {
            return Err(AuthError::AccessDenied(
                caller.id,
                "only admins can change roles".to_string(),
            )
            .into());
        }

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != target.id {
                    return Err(ValidationError::EmailTaken.into());
                }
            }
        }

        let user = user_repo.update(id, params, password_hash).await?;

        txn.commit().await?;

        Ok(Some(user))
    }

    /// Deletes an account; the caller must be the account owner or an admin
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that ID
    pub async fn delete(&self, id: i32, caller: &User) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(target) = user_repo.find_by_id(id).await? else {
            return Ok(false);
        };

        Permission::OwnerOrAdmin(target.id).check(caller)?;

        user_repo.delete(id).await?;

        txn.commit().await?;

        Ok(true)
    }
}
