//! Authentication domain models.

use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{AuthUserDto, LoginDto, Role},
    server::error::auth::AuthError,
};

/// Identity stored in the session after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub role: Role,
}

/// A session user confirmed to still exist in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i32,
    /// Display name; admins use their username.
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Fails with `AccessDenied` unless this user is the account `id`.
    pub fn ensure_owner(&self, id: i32) -> Result<(), AuthError> {
        if self.id == id {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(
                self.id,
                format!("{} attempted to act on account {}", self.role, id),
            ))
        }
    }

    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            role: self.role,
        }
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            name: self.name,
            role: self.role,
        }
    }
}

/// Credentials of a login attempt with surrounding whitespace removed from the user.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    /// Fails with `MissingCredentials` when either field is blank.
    pub fn from_dto(dto: LoginDto) -> Result<Self, AuthError> {
        let username = dto.user.trim().to_string();

        if username.is_empty() || dto.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Self {
            username,
            password: dto.password,
        })
    }
}
