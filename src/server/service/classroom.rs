//! Classroom registration, listing and roster management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        classroom::ClassroomRepository, enrollment::EnrollmentRepository,
        instructor::InstructorRepository,
    },
    error::AppError,
    model::{
        classroom::{Classroom, ClassroomWithInstructor, CreateClassroomParams},
        student::Student,
    },
};

pub struct ClassroomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the single classroom an instructor may own.
    ///
    /// # Returns
    /// - `Ok(Classroom)` - The created classroom with its schedule
    /// - `Err(AppError::NotFound)` - The instructor does not exist
    /// - `Err(AppError::BadRequest)` - The instructor already owns a classroom, or the
    ///   subject is taken by another classroom
    pub async fn create(&self, params: CreateClassroomParams) -> Result<Classroom, AppError> {
        if InstructorRepository::new(self.db)
            .find_by_id(params.instructor_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Instructor not found!".to_string()));
        }

        let repo = ClassroomRepository::new(self.db);

        if repo.find_by_instructor(params.instructor_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Instructor already has a classroom".to_string(),
            ));
        }

        if repo.subject_exists(&params.subject).await? {
            return Err(AppError::BadRequest("Subject already registered".to_string()));
        }

        let classroom = repo.create(params).await?;

        tracing::info!(
            "Instructor {} registered classroom {} ({})",
            classroom.instructor_id,
            classroom.id,
            classroom.subject
        );

        Ok(classroom)
    }

    /// Every classroom with its instructor's name, for students browsing subjects.
    pub async fn list_subjects(&self) -> Result<Vec<ClassroomWithInstructor>, AppError> {
        Ok(ClassroomRepository::new(self.db)
            .get_all_with_instructor()
            .await?)
    }

    /// Students on the roster of an instructor's classroom.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The instructor has no classroom
    pub async fn roster(&self, instructor_id: i32) -> Result<Vec<Student>, AppError> {
        let classroom = self.owned_classroom(instructor_id).await?;

        Ok(EnrollmentRepository::new(self.db)
            .roster_students(classroom.id)
            .await?)
    }

    /// Removes a student from an instructor's classroom.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No classroom, or the student is not on the roster
    pub async fn remove_student(&self, instructor_id: i32, student_id: i32) -> Result<(), AppError> {
        let classroom = self.owned_classroom(instructor_id).await?;

        let removed = EnrollmentRepository::new(self.db)
            .delete(classroom.id, student_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "Student is not enrolled in this class!".to_string(),
            ));
        }

        tracing::info!(
            "Instructor {} removed student {} from classroom {}",
            instructor_id,
            student_id,
            classroom.id
        );

        Ok(())
    }

    async fn owned_classroom(&self, instructor_id: i32) -> Result<Classroom, AppError> {
        ClassroomRepository::new(self.db)
            .find_by_instructor(instructor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Instructor has no classroom".to_string()))
    }
}
