use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::auth::AuthenticatedUser,
        service::auth::AuthService,
    },
};

/// A condition the current user must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Instructor,
    Student,
    /// The user must be the account with this id (of their own role).
    Owner(i32),
}

/// Checks the session user against a set of permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user satisfying every permission.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - All permissions hold
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted (401)
    /// - `Err(AuthError::AccessDenied)` - A permission failed (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let Some(session_user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = AuthService::new(self.db).resolve(session_user).await? else {
            return Err(AuthError::UserNotInDatabase {
                user_id: session_user.id,
                role: session_user.role,
            }
            .into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => require_role(&user, Role::Admin)?,
                Permission::Instructor => require_role(&user, Role::Instructor)?,
                Permission::Student => require_role(&user, Role::Student)?,
                Permission::Owner(id) => user.ensure_owner(*id)?,
            }
        }

        Ok(user)
    }
}

fn require_role(user: &AuthenticatedUser, role: Role) -> Result<(), AuthError> {
    if user.role == role {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            user.id,
            format!("{} attempted an action reserved for {}", user.role, role),
        ))
    }
}
