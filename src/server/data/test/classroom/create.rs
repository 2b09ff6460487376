use super::*;

/// Tests creating a classroom together with its schedule.
///
/// Verifies the classroom row and one schedule row per slot are written and the
/// returned classroom carries the slots in the given order.
///
/// Expected: Ok with classroom and two slots
#[tokio::test]
async fn creates_classroom_with_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;

    let classroom = ClassroomRepository::new(db)
        .create(CreateClassroomParams {
            instructor_id: instructor.id,
            subject: "Chemistry".to_string(),
            link: "https://meet.example.com/chemistry".to_string(),
            schedule: vec![
                TimeInterval::new("Monday", time(9, 0), time(9, 50)),
                TimeInterval::new("Wednesday", time(14, 0), time(14, 50)),
            ],
        })
        .await?;

    assert_eq!(classroom.subject, "Chemistry");
    assert_eq!(classroom.instructor_id, instructor.id);
    assert_eq!(classroom.schedule.len(), 2);
    assert_eq!(classroom.schedule[0].day, "Monday");
    assert_eq!(classroom.schedule[1].start_time, time(14, 0));

    assert_eq!(entity::prelude::ClassroomSchedule::find().count(db).await?, 2);

    Ok(())
}

/// Tests the created classroom can be read back by id and by instructor.
///
/// Expected: both lookups return the same classroom
#[tokio::test]
async fn is_found_by_id_and_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let repo = ClassroomRepository::new(db);
    let created = repo
        .create(CreateClassroomParams {
            instructor_id: instructor.id,
            subject: "Physics".to_string(),
            link: "https://meet.example.com/physics".to_string(),
            schedule: vec![TimeInterval::new("Friday", time(8, 0), time(8, 50))],
        })
        .await?;

    let by_id = repo.find_by_id(created.id).await?;
    let by_instructor = repo.find_by_instructor(instructor.id).await?;

    assert_eq!(by_id, Some(created.clone()));
    assert_eq!(by_instructor, Some(created));
    assert!(repo.subject_exists("Physics").await?);
    assert!(!repo.subject_exists("Biology").await?);

    Ok(())
}
