//! User data repository for database operations
//!
//! Provides the `UserRepository` for creating, reading, updating and deleting user
//! accounts and for the email lookups used by login and registration.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::user::{RegisterUserParams, UpdateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with an already hashed password
    ///
    /// # Arguments
    /// - `params` - Validated registration data; its plain password is not stored
    /// - `password_hash` - Salted hash of the password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(
        &self,
        params: RegisterUserParams,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            contact: ActiveValue::Set(params.contact),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            join_date: ActiveValue::Set(params.join_date),
            membership_status: ActiveValue::Set(params.membership_status),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Finds a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user exists
    /// - `Ok(None)` - No user with that ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        Ok(entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity))
    }

    /// Finds a user by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity))
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        Ok(entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect())
    }

    /// Applies a partial update
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `params` - Fields to change; the plain password in it is ignored
    /// - `password_hash` - New hash when the password changes
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active = user.clone().into_active_model();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(contact) = params.contact {
            active.contact = ActiveValue::Set(contact);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(join_date) = params.join_date {
            active.join_date = ActiveValue::Set(join_date);
        }
        if let Some(membership_status) = params.membership_status {
            active.membership_status = ActiveValue::Set(membership_status);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }

        if !active.is_changed() {
            return Ok(User::from_entity(user));
        }

        Ok(User::from_entity(active.update(self.db).await?))
    }

    /// Deletes a user, cascading to their donations and orders
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
