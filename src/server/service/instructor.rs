//! Instructor account management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::instructor::InstructorRepository,
    error::AppError,
    model::instructor::{
        CreateInstructorParams, Instructor, PaginatedInstructors, UpdateInstructorParams,
    },
    util::password::hash_password,
};

/// Upper bound on page size for listings.
pub const MAX_ENTRIES_PER_PAGE: u64 = 100;

pub struct InstructorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an instructor.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The created account
    /// - `Err(AppError::BadRequest)` - Email, username or phone already registered
    pub async fn create(&self, params: CreateInstructorParams) -> Result<Instructor, AppError> {
        let repo = InstructorRepository::new(self.db);

        if repo
            .contact_taken(
                Some(&params.email),
                Some(&params.username),
                Some(&params.phone),
                None,
            )
            .await?
        {
            return Err(AppError::BadRequest(
                "Instructor already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password).await?;
        let instructor = repo.create(&params, password_hash).await?;

        tracing::info!("Registered instructor {}", instructor.id);

        Ok(instructor)
    }

    /// Updates an instructor's own profile.
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The updated account
    /// - `Err(AppError::BadRequest)` - New email or phone belongs to another instructor
    /// - `Err(AppError::NotFound)` - No such instructor
    pub async fn update(&self, params: UpdateInstructorParams) -> Result<Instructor, AppError> {
        let repo = InstructorRepository::new(self.db);

        if repo
            .contact_taken(
                params.email.as_deref(),
                None,
                params.phone.as_deref(),
                Some(params.id),
            )
            .await?
        {
            return Err(AppError::BadRequest(
                "Email or phone already in use".to_string(),
            ));
        }

        let password_hash = match params.password.as_deref() {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        repo.update(params, password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound("Instructor not found!".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = InstructorRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Instructor not found!".to_string()));
        }

        tracing::info!("Deleted instructor {}", id);

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedInstructors, AppError> {
        let per_page = per_page.clamp(1, MAX_ENTRIES_PER_PAGE);
        let (instructors, total) = InstructorRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedInstructors {
            instructors,
            total,
            page,
            per_page,
        })
    }
}
