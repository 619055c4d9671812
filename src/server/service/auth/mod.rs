//! Account authentication: registration, login and the admin bootstrap.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{LoginParams, RegisterUserParams, User, UserRole},
    state::AdminBootstrap,
};

use self::password::{hash_password, verify_password};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account
    ///
    /// Admin accounts may only be registered by an authenticated admin.
    ///
    /// # Arguments
    /// - `params` - Validated registration data
    /// - `caller` - The authenticated user, if the request carried a token
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::AuthErr(AccessDenied))` - Admin role requested by a non-admin
    /// - `Err(AppError::ValidationErr(EmailTaken))` - Email already registered
    pub async fn register(
        &self,
        params: RegisterUserParams,
        caller: Option<&User>,
    ) -> Result<User, AppError> {
        if params.role == UserRole::Admin && !caller.is_some_and(User::is_admin) {
            return Err(AuthError::AccessDenied(
                caller.map(|c| c.id).unwrap_or_default(),
                "only admins can register admin accounts".to_string(),
            )
            .into());
        }

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(ValidationError::EmailTaken.into());
        }

        let user = user_repo
            .create(params, password_hash)
            .await
            .map_err(|err| match is_unique_violation(&err) {
                true => AppError::from(ValidationError::EmailTaken),
                false => AppError::from(err),
            })?;

        txn.commit().await?;

        tracing::info!("Registered user {} with role {}", user.id, user.role.as_str());

        Ok(user)
    }

    /// Verifies credentials and returns the matching user
    ///
    /// When bootstrap credentials are configured and presented exactly, the admin
    /// account is created first if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(
        &self,
        params: LoginParams,
        bootstrap: Option<&AdminBootstrap>,
    ) -> Result<User, AppError> {
        if let Some(bootstrap) = bootstrap {
            if params.email == bootstrap.email && params.password == bootstrap.password {
                self.ensure_bootstrap_admin(bootstrap).await?;
            }
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the bootstrap admin unless an account with its email already exists.
    async fn ensure_bootstrap_admin(&self, bootstrap: &AdminBootstrap) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&bootstrap.email).await?.is_some() {
            return Ok(());
        }

        self.insert_bootstrap_admin(bootstrap).await
    }

    /// Inserts the bootstrap admin.
    ///
    /// A concurrent login may insert the same row between the lookup and this insert; the
    /// unique email index rejects the second insert and the existing row is used instead.
    async fn insert_bootstrap_admin(&self, bootstrap: &AdminBootstrap) -> Result<(), AppError> {
        let password_hash = hash_password(&bootstrap.password)?;
        let params = RegisterUserParams {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            contact: "0000000000".to_string(),
            email: bootstrap.email.clone(),
            password: bootstrap.password.clone(),
            join_date: chrono::Utc::now().date_naive(),
            membership_status: "Active".to_string(),
            role: UserRole::Admin,
        };

        match UserRepository::new(self.db).create(params, password_hash).await {
            Ok(admin) => {
                tracing::info!("Created bootstrap admin account {}", admin.id);
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!("Bootstrap admin already created by another login");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use entity::prelude::User as UserEntity;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    use super::*;

    fn bootstrap() -> AdminBootstrap {
        AdminBootstrap {
            email: "root@club.test".to_string(),
            password: "bootstrap-pass".to_string(),
        }
    }

    /// Tests the insert losing the race against a login that already created the admin.
    ///
    /// Expected: Ok, still one row, and the login that follows succeeds
    #[tokio::test]
    async fn bootstrap_insert_tolerates_existing_row() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let bootstrap = bootstrap();

        AuthService::new(db).insert_bootstrap_admin(&bootstrap).await.unwrap();
        let second = AuthService::new(db).insert_bootstrap_admin(&bootstrap).await;

        assert!(second.is_ok());
        assert_eq!(UserEntity::find().count(db).await?, 1);

        let login = AuthService::new(db)
            .login(
                LoginParams {
                    email: bootstrap.email.clone(),
                    password: bootstrap.password.clone(),
                },
                Some(&bootstrap),
            )
            .await
            .unwrap();
        assert!(login.is_admin());

        Ok(())
    }

    /// Expected: only a duplicate email counts as a lost race
    #[tokio::test]
    async fn unique_violation_detection() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        UserFactory::new(db).email("dup@club.test").build().await?;
        let err = UserFactory::new(db)
            .email("dup@club.test")
            .build()
            .await
            .unwrap_err();

        assert!(is_unique_violation(&err));
        assert!(!is_unique_violation(&DbErr::RecordNotFound("x".to_string())));

        Ok(())
    }
}
