use super::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests a student with a free schedule joins a classroom with seats.
///
/// Verifies the enrollment is persisted and the returned value carries the
/// student, the classroom and the instructor's name.
///
/// Expected: Ok(Enrollment)
#[tokio::test]
async fn enrolls_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let instructor = factory::instructor::InstructorFactory::new(db)
        .name("Marie Curie")
        .build()
        .await?;
    let classroom = factory::classroom::ClassroomFactory::new(db, instructor.id)
        .subject("Chemistry")
        .slot("Monday", "09:00:00", "09:50:00")
        .build()
        .await?;
    let student = factory::create_student(db).await?;

    let enrollment = EnrollmentService::new(db, &mail)
        .enroll(student.id, classroom.id)
        .await?;

    assert_eq!(enrollment.student.id, student.id);
    assert_eq!(enrollment.classroom.subject, "Chemistry");
    assert_eq!(enrollment.instructor_name, "Marie Curie");
    assert!(
        EnrollmentRepository::new(db)
            .is_enrolled(classroom.id, student.id)
            .await?
    );

    Ok(())
}

/// Tests a classroom without schedule slots and an empty roster accepts.
///
/// Expected: Ok
#[tokio::test]
async fn enrolls_into_classroom_without_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let instructor = factory::create_instructor(db).await?;
    // Inserted directly: the factory always adds a default slot.
    let classroom = entity::classroom::ActiveModel {
        subject: ActiveValue::Set("Reading".to_string()),
        instructor_id: ActiveValue::Set(instructor.id),
        link: ActiveValue::Set("https://meet.example.com/reading".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let student = factory::create_student(db).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, classroom.id)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an overlapping class blocks the enrollment and is named in the error.
///
/// Existing Monday 09:00-09:50, candidate Monday 09:30-10:20.
///
/// Expected: Err(ScheduleConflict(["Biology at Monday 09:00:00"]))
#[tokio::test]
async fn rejects_schedule_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let first_instructor = factory::create_instructor(db).await?;
    let second_instructor = factory::create_instructor(db).await?;
    let biology = factory::classroom::ClassroomFactory::new(db, first_instructor.id)
        .subject("Biology")
        .slot("Monday", "09:00:00", "09:50:00")
        .build()
        .await?;
    let physics = factory::classroom::ClassroomFactory::new(db, second_instructor.id)
        .subject("Physics")
        .slot("Monday", "09:30:00", "10:20:00")
        .build()
        .await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, biology.id, student.id).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, physics.id)
        .await;

    match result {
        Err(AppError::EnrollmentErr(EnrollmentRejection::ScheduleConflict(conflicts))) => {
            assert_eq!(conflicts, vec!["Biology at Monday 09:00:00".to_string()]);
        }
        other => panic!("Expected ScheduleConflict, got {:?}", other.map(|_| ())),
    }
    assert!(
        !EnrollmentRepository::new(db)
            .is_enrolled(physics.id, student.id)
            .await?
    );

    Ok(())
}

/// Tests a later class on the same day does not conflict.
///
/// Existing Monday 09:00-09:50, candidate Monday 10:30-11:20.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_non_overlapping_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let first_instructor = factory::create_instructor(db).await?;
    let second_instructor = factory::create_instructor(db).await?;
    let morning = factory::classroom::ClassroomFactory::new(db, first_instructor.id)
        .slot("Monday", "09:00:00", "09:50:00")
        .build()
        .await?;
    let later = factory::classroom::ClassroomFactory::new(db, second_instructor.id)
        .slot("Monday", "10:30:00", "11:20:00")
        .build()
        .await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, morning.id, student.id).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, later.id)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a full classroom rejects the 31st student.
///
/// Expected: Err(CapacityExceeded)
#[tokio::test]
async fn rejects_full_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    factory::helpers::fill_roster(db, classroom.id, 30).await?;
    let student = factory::create_student(db).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, classroom.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::EnrollmentErr(EnrollmentRejection::CapacityExceeded))
    ));

    Ok(())
}

/// Tests the 30th seat is still granted.
///
/// Expected: Ok with 29 students already enrolled
#[tokio::test]
async fn accepts_last_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    factory::helpers::fill_roster(db, classroom.id, 29).await?;
    let student = factory::create_student(db).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, classroom.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(
        EnrollmentRepository::new(db).roster(classroom.id).await?.len(),
        30
    );

    Ok(())
}

/// Tests enrolling twice is refused before schedule and capacity are checked.
///
/// The classroom is full and its own slot would collide with itself, yet the
/// duplicate is what gets reported.
///
/// Expected: Err(AlreadyEnrolled)
#[tokio::test]
async fn rejects_duplicate_enrollment_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, classroom.id, student.id).await?;
    factory::helpers::fill_roster(db, classroom.id, 29).await?;

    let result = EnrollmentService::new(db, &mail)
        .enroll(student.id, classroom.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::EnrollmentErr(EnrollmentRejection::AlreadyEnrolled))
    ));

    Ok(())
}

/// Tests an unknown student is reported before an unknown classroom.
///
/// Expected: Err(NotFound("Student")) then Err(NotFound("Classroom"))
#[tokio::test]
async fn rejects_unknown_student_then_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = mail_stub();

    let student = factory::create_student(db).await?;
    let service = EnrollmentService::new(db, &mail);

    let missing_both = service.enroll(student.id + 100, 500).await;
    assert!(matches!(
        missing_both,
        Err(AppError::EnrollmentErr(EnrollmentRejection::NotFound("Student")))
    ));

    let missing_classroom = service.enroll(student.id, 500).await;
    assert!(matches!(
        missing_classroom,
        Err(AppError::EnrollmentErr(EnrollmentRejection::NotFound("Classroom")))
    ));

    Ok(())
}
