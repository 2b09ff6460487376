//! Enrollment of students into classrooms.
//!
//! The rules are checked in a fixed order and the first failure wins:
//!
//! 1. both references must be well-formed identifiers (`parse_references`)
//! 2. the student, then the classroom, must exist
//! 3. the student must not already be on the roster
//! 4. the classroom's slots must not collide with the student's classes
//! 5. the roster must be below capacity
//!
//! Steps 3 to 5 are pure functions over snapshots (`decision`, `conflict`,
//! `overlap`). The accepted enrollment is then persisted by a conditional insert that
//! recounts capacity, and the student is notified by mail in the background.

pub mod conflict;
pub mod decision;
pub mod overlap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        classroom::ClassroomRepository, enrollment::EnrollmentRepository,
        student::StudentRepository,
    },
    error::{enrollment::EnrollmentRejection, AppError},
    model::{
        classroom::CLASSROOM_CAPACITY,
        enrollment::{
            ClassroomSnapshot, Enrollment, EnrollmentOutcome, ScheduledClass,
            StudentScheduleSnapshot,
        },
    },
    service::{enrollment::decision::decide, mail::MailService},
    util::parse::parse_identifier,
};

/// Parses the student and classroom path segments of an enrollment request.
///
/// # Returns
/// - `Ok((student_id, classroom_id))` - Both are well-formed
/// - `Err(EnrollmentRejection::InvalidIdentifier)` - Either is malformed
pub fn parse_references(
    student_ref: &str,
    classroom_ref: &str,
) -> Result<(i32, i32), EnrollmentRejection> {
    match (parse_identifier(student_ref), parse_identifier(classroom_ref)) {
        (Some(student_id), Some(classroom_id)) => Ok((student_id, classroom_id)),
        _ => Err(EnrollmentRejection::InvalidIdentifier),
    }
}

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
    mail: &'a MailService,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, mail: &'a MailService) -> Self {
        Self { db, mail }
    }

    /// Enrolls a student into a classroom.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The student is on the roster; a notification is queued
    /// - `Err(AppError::EnrollmentErr(_))` - A rule rejected the enrollment
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn enroll(&self, student_id: i32, classroom_id: i32) -> Result<Enrollment, AppError> {
        let Some(student) = StudentRepository::new(self.db).find_by_id(student_id).await? else {
            return Err(EnrollmentRejection::NotFound("Student").into());
        };

        let classroom_repo = ClassroomRepository::new(self.db);
        let Some(target) = classroom_repo.find_with_instructor(classroom_id).await? else {
            return Err(EnrollmentRejection::NotFound("Classroom").into());
        };

        let enrollment_repo = EnrollmentRepository::new(self.db);

        let attending_ids = enrollment_repo.classroom_ids_for_student(student.id).await?;
        let schedule = StudentScheduleSnapshot {
            student_id: student.id,
            classes: classroom_repo
                .get_by_ids(&attending_ids)
                .await?
                .into_iter()
                .map(ScheduledClass::from)
                .collect(),
        };

        let snapshot = ClassroomSnapshot {
            classroom_id: target.classroom.id,
            subject: target.classroom.subject.clone(),
            schedule: target.classroom.schedule.clone(),
            roster: enrollment_repo.roster(target.classroom.id).await?,
        };

        if let Err(rejection) = decide(&schedule, &snapshot) {
            tracing::info!(
                "Enrollment of student {} into classroom {} rejected: {:?}",
                student.id,
                snapshot.classroom_id,
                rejection
            );
            return Err(rejection.into());
        }

        match enrollment_repo
            .create_within_capacity(snapshot.classroom_id, student.id, CLASSROOM_CAPACITY)
            .await?
        {
            EnrollmentOutcome::Inserted => {}
            EnrollmentOutcome::Full => return Err(EnrollmentRejection::CapacityExceeded.into()),
            EnrollmentOutcome::AlreadyPresent => {
                return Err(EnrollmentRejection::AlreadyEnrolled.into())
            }
        }

        tracing::info!(
            "Student {} enrolled in classroom {}",
            student.id,
            snapshot.classroom_id
        );

        let enrollment = Enrollment {
            student,
            classroom: target.classroom,
            instructor_name: target.instructor_name,
        };

        self.mail.notify_enrollment(&enrollment);

        Ok(enrollment)
    }

    /// Removes a student from a classroom's roster.
    ///
    /// # Returns
    /// - `Ok(())` - The enrollment was removed
    /// - `Err(AppError::EnrollmentErr(NotFound))` - Unknown student or classroom
    /// - `Err(AppError::NotFound)` - The student was not enrolled
    pub async fn unenroll(&self, student_id: i32, classroom_id: i32) -> Result<(), AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(EnrollmentRejection::NotFound("Student").into());
        }

        if ClassroomRepository::new(self.db)
            .find_by_id(classroom_id)
            .await?
            .is_none()
        {
            return Err(EnrollmentRejection::NotFound("Classroom").into());
        }

        let removed = EnrollmentRepository::new(self.db)
            .delete(classroom_id, student_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "You are not enrolled in this class!".to_string(),
            ));
        }

        tracing::info!("Student {} left classroom {}", student_id, classroom_id);

        Ok(())
    }
}
