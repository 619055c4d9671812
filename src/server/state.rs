//! Shared handler state, built once by `startup::build_state` and cloned per request.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::token::TokenService};

/// Credentials which, when presented to login, create the initial admin account.
#[derive(Clone, Debug)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

impl AdminBootstrap {
    /// Builds the bootstrap pair from configuration.
    ///
    /// # Returns
    /// - `Some(AdminBootstrap)` - Both email and password are configured
    /// - `None` - Either value is missing, bootstrap disabled
    pub fn from_config(config: &Config) -> Option<Self> {
        match (
            config.admin_bootstrap_email.as_ref(),
            config.admin_bootstrap_password.as_ref(),
        ) {
            (Some(email), Some(password)) => Some(Self {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the HMAC keys
/// - `AdminBootstrap` is two short strings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies HS256 bearer tokens.
    pub tokens: TokenService,

    /// Bootstrap admin credentials, `None` when disabled.
    pub admin_bootstrap: Option<AdminBootstrap>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        admin_bootstrap: Option<AdminBootstrap>,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_bootstrap,
        }
    }
}
