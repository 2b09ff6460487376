use super::*;

/// Tests enrolling into a classroom with free seats.
///
/// Expected: Ok(Inserted) and one enrollment row
#[tokio::test]
async fn inserts_when_seats_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let outcome = repo
        .create_within_capacity(classroom.id, student.id, 30)
        .await?;

    assert_eq!(outcome, EnrollmentOutcome::Inserted);
    assert!(repo.is_enrolled(classroom.id, student.id).await?);
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 1);

    Ok(())
}

/// Tests the last free seat is still granted.
///
/// Expected: Ok(Inserted) with 29 students already enrolled
#[tokio::test]
async fn inserts_into_last_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    factory::helpers::fill_roster(db, classroom.id, 29).await?;
    let student = factory::create_student(db).await?;

    let outcome = EnrollmentRepository::new(db)
        .create_within_capacity(classroom.id, student.id, 30)
        .await?;

    assert_eq!(outcome, EnrollmentOutcome::Inserted);
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 30);

    Ok(())
}

/// Tests a full classroom refuses another student and writes nothing.
///
/// Expected: Ok(Full) and roster size unchanged
#[tokio::test]
async fn reports_full_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    factory::helpers::fill_roster(db, classroom.id, 30).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let outcome = repo
        .create_within_capacity(classroom.id, student.id, 30)
        .await?;

    assert_eq!(outcome, EnrollmentOutcome::Full);
    assert!(!repo.is_enrolled(classroom.id, student.id).await?);
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 30);

    Ok(())
}

/// Tests a duplicate enrollment is reported instead of raised.
///
/// Verifies the unique (classroom, student) index turns a second insert into
/// `AlreadyPresent` without adding a row.
///
/// Expected: Ok(AlreadyPresent)
#[tokio::test]
async fn reports_existing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, classroom.id, student.id).await?;

    let outcome = EnrollmentRepository::new(db)
        .create_within_capacity(classroom.id, student.id, 30)
        .await?;

    assert_eq!(outcome, EnrollmentOutcome::AlreadyPresent);
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 1);

    Ok(())
}

/// Tests two students racing for the last seat.
///
/// Both requests run at once against a roster with one free seat; the seat
/// check and the insert are a single statement, so only one can win.
///
/// Expected: one Ok(Inserted), one Ok(Full), roster size 30
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn grants_last_seat_once_under_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    factory::helpers::fill_roster(db, classroom.id, 29).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let (first_outcome, second_outcome) = tokio::join!(
        repo.create_within_capacity(classroom.id, first.id, 30),
        repo.create_within_capacity(classroom.id, second.id, 30),
    );

    let mut outcomes = vec![first_outcome?, second_outcome?];
    outcomes.sort_by_key(|outcome| *outcome != EnrollmentOutcome::Inserted);

    assert_eq!(
        outcomes,
        vec![EnrollmentOutcome::Inserted, EnrollmentOutcome::Full]
    );
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 30);

    Ok(())
}

/// Tests the same student enrolling twice at once.
///
/// Expected: one Ok(Inserted), one Ok(AlreadyPresent), one row
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reports_duplicate_under_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let (first_outcome, second_outcome) = tokio::join!(
        repo.create_within_capacity(classroom.id, student.id, 30),
        repo.create_within_capacity(classroom.id, student.id, 30),
    );

    let mut outcomes = vec![first_outcome?, second_outcome?];
    outcomes.sort_by_key(|outcome| *outcome != EnrollmentOutcome::Inserted);

    assert_eq!(
        outcomes,
        vec![EnrollmentOutcome::Inserted, EnrollmentOutcome::AlreadyPresent]
    );
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 1);

    Ok(())
}
