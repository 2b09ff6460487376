use super::*;

/// Tests fetching several classrooms with their schedules.
///
/// Expected: Ok with each classroom carrying only its own slots
#[tokio::test]
async fn returns_classrooms_with_own_schedules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let other = factory::create_instructor(db).await?;
    let first = factory::classroom::ClassroomFactory::new(db, instructor.id)
        .slot("Monday", "09:00:00", "09:50:00")
        .slot("Thursday", "10:00:00", "10:50:00")
        .build()
        .await?;
    let second = factory::classroom::ClassroomFactory::new(db, other.id)
        .slot("Tuesday", "13:00:00", "13:50:00")
        .build()
        .await?;

    let classrooms = ClassroomRepository::new(db)
        .get_by_ids(&[second.id, first.id])
        .await?;

    assert_eq!(classrooms.len(), 2);
    assert_eq!(classrooms[0].id, first.id);
    assert_eq!(classrooms[0].schedule.len(), 2);
    assert_eq!(classrooms[1].id, second.id);
    assert_eq!(classrooms[1].schedule.len(), 1);
    assert_eq!(classrooms[1].schedule[0].day, "Tuesday");

    Ok(())
}

/// Tests unknown ids are skipped and an empty id list short-circuits.
///
/// Expected: Ok(vec![]) for both
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomRepository::new(db);

    assert!(repo.get_by_ids(&[]).await?.is_empty());
    assert!(repo.get_by_ids(&[999]).await?.is_empty());

    Ok(())
}
