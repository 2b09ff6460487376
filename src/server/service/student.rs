//! Student account management and class listings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        classroom::ClassroomRepository, enrollment::EnrollmentRepository,
        student::StudentRepository,
    },
    error::AppError,
    model::{
        classroom::Classroom,
        student::{CreateStudentParams, PaginatedStudents, Student, UpdateStudentParams},
    },
    service::instructor::MAX_ENTRIES_PER_PAGE,
    util::password::hash_password,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created account
    /// - `Err(AppError::BadRequest)` - Email, username or phone already registered
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo
            .contact_taken(
                Some(&params.email),
                Some(&params.username),
                Some(&params.phone),
                None,
            )
            .await?
        {
            return Err(AppError::BadRequest("Student already registered".to_string()));
        }

        let password_hash = hash_password(&params.password).await?;
        let student = repo.create(&params, password_hash).await?;

        tracing::info!("Registered student {}", student.id);

        Ok(student)
    }

    /// Updates a student's own profile.
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

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
            .ok_or_else(|| AppError::NotFound("Student not found!".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = StudentRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Student not found!".to_string()));
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }

    /// Classrooms the student is enrolled in, in enrollment order.
    pub async fn classrooms(&self, student_id: i32) -> Result<Vec<Classroom>, AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found!".to_string()));
        }

        let ids = EnrollmentRepository::new(self.db)
            .classroom_ids_for_student(student_id)
            .await?;
        let mut classrooms = ClassroomRepository::new(self.db).get_by_ids(&ids).await?;

        classrooms.sort_by_key(|c| ids.iter().position(|id| *id == c.id));

        Ok(classrooms)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedStudents, AppError> {
        let per_page = per_page.clamp(1, MAX_ENTRIES_PER_PAGE);
        let (students, total) = StudentRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedStudents {
            students,
            total,
            page,
            per_page,
        })
    }
}
