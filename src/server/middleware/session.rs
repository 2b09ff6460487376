//! Type-safe session management wrapper.
//!
//! `AuthSession` owns the single session key used for authentication so handlers
//! never touch raw keys or value types.

use tower_sessions::Session;

use crate::server::{error::AppError, model::auth::SessionUser};

const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication session management.
///
/// Stores and retrieves the logged-in user's id and role.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds a user to the session after a successful login.
    ///
    /// The session id is rotated first so an id issued before login cannot be
    /// reused to ride the authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - User stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the user bound to the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.session.get::<SessionUser>(SESSION_AUTH_USER).await?)
    }

    /// Removes all session data and deletes the session record.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
