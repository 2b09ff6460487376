//! Instructor data repository for database operations.
//!
//! Provides the `InstructorRepository` for instructor accounts: registration,
//! profile updates, deletion, credential lookup and paginated listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::instructor::{
    CreateInstructorParams, Instructor, UpdateInstructorParams,
};

pub struct InstructorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new instructor.
    ///
    /// # Arguments
    /// - `params` - Validated registration; its plaintext password is ignored
    /// - `password_hash` - argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The created instructor
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        params: &CreateInstructorParams,
        password_hash: String,
    ) -> Result<Instructor, DbErr> {
        let now = Utc::now();
        let entity = entity::instructor::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            email: ActiveValue::Set(params.email.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            username: ActiveValue::Set(params.username.clone()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Instructor::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, DbErr> {
        let entity = entity::prelude::Instructor::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Instructor::from_entity))
    }

    /// Returns the full row, password hash included, for credential checks.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::instructor::Model>, DbErr> {
        entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether another instructor already uses any of the given contact values.
    ///
    /// # Arguments
    /// - `email`, `username`, `phone` - Values to look for; `None` skips the column
    /// - `exclude_id` - Instructor to ignore, used when updating one's own profile
    ///
    /// # Returns
    /// - `Ok(true)` - At least one value is taken
    /// - `Ok(false)` - All values are free or none were given
    pub async fn contact_taken(
        &self,
        email: Option<&str>,
        username: Option<&str>,
        phone: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut any = Condition::any();
        if let Some(email) = email {
            any = any.add(entity::instructor::Column::Email.eq(email));
        }
        if let Some(username) = username {
            any = any.add(entity::instructor::Column::Username.eq(username));
        }
        if let Some(phone) = phone {
            any = any.add(entity::instructor::Column::Phone.eq(phone));
        }
        if any.is_empty() {
            return Ok(false);
        }

        let mut query = entity::prelude::Instructor::find().filter(any);
        if let Some(id) = exclude_id {
            query = query.filter(entity::instructor::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - The updated instructor
    /// - `Ok(None)` - No instructor with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateInstructorParams,
        password_hash: Option<String>,
    ) -> Result<Option<Instructor>, DbErr> {
        let Some(existing) = entity::prelude::Instructor::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::instructor::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Instructor::from_entity(entity)))
    }

    /// Deletes an instructor; the classroom and its enrollments cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No instructor with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Instructor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of instructors ordered by name, plus the total count.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Instructor>, u64), DbErr> {
        let paginator = entity::prelude::Instructor::find()
            .order_by_asc(entity::instructor::Column::Name)
            .order_by_asc(entity::instructor::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let instructors = paginator.fetch_page(page).await?;

        Ok((
            instructors.into_iter().map(Instructor::from_entity).collect(),
            total,
        ))
    }
}
