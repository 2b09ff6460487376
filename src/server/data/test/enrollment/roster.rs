use super::*;

/// Tests roster ids come back in enrollment order.
///
/// Expected: Ok with ids in insertion order
#[tokio::test]
async fn returns_student_ids_in_enrollment_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    factory::create_enrollment(db, classroom.id, second.id).await?;
    factory::create_enrollment(db, classroom.id, first.id).await?;

    let roster = EnrollmentRepository::new(db).roster(classroom.id).await?;

    assert_eq!(roster, vec![second.id, first.id]);

    Ok(())
}

/// Tests the student roster is ordered by name.
///
/// Expected: Ok with students sorted alphabetically
#[tokio::test]
async fn returns_students_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let zoe = factory::student::StudentFactory::new(db)
        .name("Zoe Martins")
        .build()
        .await?;
    let ana = factory::student::StudentFactory::new(db)
        .name("Ana Souza")
        .build()
        .await?;
    factory::create_enrollment(db, classroom.id, zoe.id).await?;
    factory::create_enrollment(db, classroom.id, ana.id).await?;

    let students = EnrollmentRepository::new(db)
        .roster_students(classroom.id)
        .await?;

    let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Zoe Martins"]);

    Ok(())
}

/// Tests an empty classroom has an empty roster.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_new_classroom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;

    let repo = EnrollmentRepository::new(db);
    assert!(repo.roster(classroom.id).await?.is_empty());
    assert!(repo.roster_students(classroom.id).await?.is_empty());

    Ok(())
}
