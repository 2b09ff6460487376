//! Credential checks and session identity resolution.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::Role,
    server::{
        data::{admin::AdminRepository, instructor::InstructorRepository, student::StudentRepository},
        error::{auth::AuthError, AppError},
        model::auth::{AuthenticatedUser, LoginParams, SessionUser},
        util::password::{hash_password, verify_password, verify_unknown_user},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs in an instructor or a student.
    ///
    /// Instructors are looked up first; a username taken by both roles therefore
    /// always logs in as the instructor.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<AuthenticatedUser, AppError> {
        if let Some(instructor) = InstructorRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
        {
            return check(
                &params,
                &instructor.password_hash,
                AuthenticatedUser {
                    id: instructor.id,
                    name: instructor.name,
                    role: Role::Instructor,
                },
            )
            .await;
        }

        if let Some(student) = StudentRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
        {
            return check(
                &params,
                &student.password_hash,
                AuthenticatedUser {
                    id: student.id,
                    name: student.name,
                    role: Role::Student,
                },
            )
            .await;
        }

        verify_unknown_user(&params.password).await?;
        tracing::warn!("Login attempt for unknown user '{}'", params.username);
        Err(AuthError::InvalidCredentials(params.username).into())
    }

    /// Logs in an admin.
    pub async fn admin_login(&self, params: LoginParams) -> Result<AuthenticatedUser, AppError> {
        let Some(admin) = AdminRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
        else {
            verify_unknown_user(&params.password).await?;
            tracing::warn!("Admin login attempt for unknown user '{}'", params.username);
            return Err(AuthError::InvalidCredentials(params.username).into());
        };

        check(
            &params,
            &admin.password_hash,
            AuthenticatedUser {
                id: admin.id,
                name: admin.username,
                role: Role::Admin,
            },
        )
        .await
    }

    /// Resolves a session identity against the database.
    ///
    /// # Returns
    /// - `Ok(Some(AuthenticatedUser))` - The account still exists
    /// - `Ok(None)` - The account was deleted since login
    pub async fn resolve(&self, user: SessionUser) -> Result<Option<AuthenticatedUser>, AppError> {
        let resolved = match user.role {
            Role::Admin => AdminRepository::new(self.db)
                .find_by_id(user.id)
                .await?
                .map(|a| AuthenticatedUser {
                    id: a.id,
                    name: a.username,
                    role: Role::Admin,
                }),
            Role::Instructor => InstructorRepository::new(self.db)
                .find_by_id(user.id)
                .await?
                .map(|i| AuthenticatedUser {
                    id: i.id,
                    name: i.name,
                    role: Role::Instructor,
                }),
            Role::Student => StudentRepository::new(self.db)
                .find_by_id(user.id)
                .await?
                .map(|s| AuthenticatedUser {
                    id: s.id,
                    name: s.name,
                    role: Role::Student,
                }),
        };

        Ok(resolved)
    }

    /// Creates the first admin account when none exists.
    ///
    /// # Returns
    /// - `Ok(true)` - An admin was created
    /// - `Ok(false)` - An admin already existed; nothing changed
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.any_exists().await? {
            return Ok(false);
        }

        let password_hash = hash_password(password).await?;
        repo.create(username.to_string(), password_hash).await?;

        Ok(true)
    }
}

/// Verifies the password off the runtime thread and logs the outcome.
async fn check(
    params: &LoginParams,
    password_hash: &str,
    user: AuthenticatedUser,
) -> Result<AuthenticatedUser, AppError> {
    if verify_password(&params.password, password_hash).await? {
        tracing::info!("{} {} logged in", user.role, user.id);
        Ok(user)
    } else {
        tracing::warn!("Wrong password for {} '{}'", user.role, params.username);
        Err(AuthError::InvalidCredentials(params.username.clone()).into())
    }
}
