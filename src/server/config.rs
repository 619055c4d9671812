use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    /// Credentials that create the first admin on login. Both must be set to enable it.
    pub admin_bootstrap_email: Option<String>,
    pub admin_bootstrap_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRY_HOURS".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expiry_hours,
            admin_bootstrap_email: std::env::var("ADMIN_BOOTSTRAP_EMAIL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            admin_bootstrap_password: std::env::var("ADMIN_BOOTSTRAP_PASSWORD")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}
