//! Instructor factory for creating test instructor entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let instructor = InstructorFactory::new(&db)
///     .username("mcurie")
///     .name("Marie Curie")
///     .build()
///     .await?;
/// ```
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    phone: String,
    username: String,
    password_hash: String,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Instructor"`
    /// - email: `"instructor{id}@example.com"`
    /// - phone: ten digits derived from the counter
    /// - username: `"instructor{id}"`
    /// - password_hash: `"unusable"` (never verifies)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: "Instructor".to_string(),
            email: format!("instructor{}@example.com", id),
            phone: format!("{:010}", id),
            username: format!("instructor{}", id),
            password_hash: "unusable".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash. Use a real argon2 hash when the test logs in.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the instructor entity into the database.
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        let now = Utc::now();
        entity::instructor::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
pub async fn create_instructor(
    db: &DatabaseConnection,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
