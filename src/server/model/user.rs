//! Domain & parameter models for user accounts
//!
//! Defines the user domain model with its closed role enum, the registration, edit and
//! login parameter models, and the conversions from entity and into Dtos.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    model::user::{LoginDto, UserDto, UserPayloadDto},
    server::{
        error::validation::ValidationError,
        util::parse::{
            non_blank, parse_date, present, text_value, validate_email, validate_password,
            DATE_FORMAT,
        },
    },
};

const REGISTER_FIELDS: &str =
    "first_name, last_name, contact, email, password, join_date, membership_status";

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Stored and serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ValidationError::InvalidRole(value.to_string())),
        }
    }
}

/// The user domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub email: String,
    pub password_hash: String,
    pub join_date: NaiveDate,
    pub membership_status: String,
    pub role: UserRole,
}

impl User {
    /// Converts an entity model to the user domain model
    ///
    /// A stored role outside the closed set is read as `UserRole::User` so an unexpected
    /// value can never grant admin rights.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let role = entity.role.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "User {} has unknown stored role '{}', treating as user",
                entity.id,
                entity.role
            );
            UserRole::User
        });

        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            contact: entity.contact,
            email: entity.email,
            password_hash: entity.password_hash,
            join_date: entity.join_date,
            membership_status: entity.membership_status,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts into the public projection, dropping the password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            contact: self.contact,
            email: self.email,
            join_date: self.join_date.format(DATE_FORMAT).to_string(),
            membership_status: self.membership_status,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for registering a new user
///
/// Carries the plain password; hashing happens in the service right before insert.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub email: String,
    pub password: String,
    pub join_date: NaiveDate,
    pub membership_status: String,
    pub role: UserRole,
}

impl RegisterUserParams {
    /// Validates a registration payload
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - All required fields present and well formed
    /// - `Err(ValidationError)` - Missing field, bad email, short password, bad date or role
    pub fn from_dto(dto: UserPayloadDto) -> Result<Self, ValidationError> {
        let contact = text_value("contact", dto.contact)?;
        let (
            Some(first_name),
            Some(last_name),
            Some(contact),
            Some(email),
            Some(password),
            Some(join_date),
            Some(membership_status),
        ) = (
            present(dto.first_name),
            present(dto.last_name),
            contact,
            present(dto.email),
            present(dto.password),
            present(dto.join_date),
            present(dto.membership_status),
        )
        else {
            return Err(ValidationError::MissingFields(REGISTER_FIELDS.to_string()));
        };

        validate_password(&password)?;
        validate_email(&email)?;
        let join_date = parse_date("join_date", &join_date)?;
        let role = match present(dto.role) {
            Some(role) => role.parse()?,
            None => UserRole::User,
        };

        Ok(Self {
            first_name,
            last_name,
            contact,
            email,
            password,
            join_date,
            membership_status,
            role,
        })
    }
}

/// Parameters for a partial user edit. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub membership_status: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UserPayloadDto) -> Result<Self, ValidationError> {
        let email = non_blank("email", dto.email)?;
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let password = non_blank("password", dto.password)?;
        if let Some(password) = &password {
            validate_password(password)?;
        }

        let join_date = non_blank("join_date", dto.join_date)?
            .map(|d| parse_date("join_date", &d))
            .transpose()?;

        let role = non_blank("role", dto.role)?
            .map(|r| r.parse::<UserRole>())
            .transpose()?;

        Ok(Self {
            first_name: non_blank("first_name", dto.first_name)?,
            last_name: non_blank("last_name", dto.last_name)?,
            contact: text_value("contact", dto.contact)?,
            email,
            password,
            join_date,
            membership_status: non_blank("membership_status", dto.membership_status)?,
            role,
        })
    }
}

/// Login credentials
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationError> {
        let (Some(email), Some(password)) = (present(dto.email), present(dto.password)) else {
            return Err(ValidationError::MissingFields("email, password".to_string()));
        };

        Ok(Self { email, password })
    }
}
