//! Caller identity and authorization.
//!
//! `BearerIdentity` recovers the caller's user ID from the `Authorization: Bearer` header.
//! `AuthGuard` loads that user and checks it against a list of `Permission`s.

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
};

/// Identity proven by a valid bearer token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearerIdentity {
    pub user_id: i32,
}

impl BearerIdentity {
    /// Reads and verifies the bearer token in the request headers.
    ///
    /// # Returns
    /// - `Ok(BearerIdentity)` - Token present and valid
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Wrong scheme, empty, forged or expired token
    fn from_parts(parts: &Parts, state: &AppState) -> Result<Self, AuthError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header
            .to_str()
            .map_err(|_| AuthError::InvalidToken("header is not valid ASCII".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("expected `Bearer <token>`".to_string()))?;

        let claims = state.tokens.verify(token)?;

        Ok(Self {
            user_id: claims.user_id,
        })
    }
}

impl FromRequestParts<AppState> for BearerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts, state)?)
    }
}

/// Absent header yields `None`; a header that is present but invalid is still rejected.
impl OptionalFromRequestParts<AppState> for BearerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(None);
        }

        Ok(Some(Self::from_parts(parts, state)?))
    }
}

/// Authorization predicate evaluated against the calling user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permission {
    /// Caller has the admin role.
    Admin,
    /// Caller is the user with this ID.
    Owner(i32),
    /// Caller is the user with this ID or an admin.
    OwnerOrAdmin(i32),
}

impl Permission {
    /// Checks the permission for a user
    ///
    /// # Returns
    /// - `Ok(())` - Permission granted
    /// - `Err(AuthError::AccessDenied)` - Permission denied
    pub fn check(&self, user: &User) -> Result<(), AuthError> {
        let granted = match self {
            Permission::Admin => user.is_admin(),
            Permission::Owner(owner_id) => user.id == *owner_id,
            Permission::OwnerOrAdmin(owner_id) => user.id == *owner_id || user.is_admin(),
        };

        if granted {
            return Ok(());
        }

        let reason = match self {
            Permission::Admin => "admin role required",
            Permission::Owner(_) => "you can only modify your own records",
            Permission::OwnerOrAdmin(_) => "you can only modify your own account",
        };

        Err(AuthError::AccessDenied(user.id, reason.to_string()))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a BearerIdentity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a BearerIdentity) -> Self {
        Self { db, identity }
    }

    /// Loads the caller and checks every permission in order
    ///
    /// # Returns
    /// - `Ok(User)` - The caller, all permissions granted
    /// - `Err(AuthError::UserNotFound)` - Token names a user that no longer exists
    /// - `Err(AuthError::AccessDenied)` - First permission that failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(self.identity.user_id).await? else {
            return Err(AuthError::UserNotFound(self.identity.user_id).into());
        };

        for permission in permissions {
            permission.check(&user)?;
        }

        Ok(user)
    }
}
