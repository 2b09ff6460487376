use super::*;

/// Tests a session identity resolves to the stored account.
///
/// Expected: Ok(Some) with the instructor's name
#[tokio::test]
async fn resolves_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::instructor::InstructorFactory::new(db)
        .name("Alan Turing")
        .build()
        .await?;

    let user = AuthService::new(db)
        .resolve(SessionUser {
            id: instructor.id,
            role: Role::Instructor,
        })
        .await?
        .unwrap();

    assert_eq!(user.name, "Alan Turing");
    assert_eq!(user.role, Role::Instructor);

    Ok(())
}

/// Tests the role is part of the identity: a student id is not an instructor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_cross_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let user = AuthService::new(db)
        .resolve(SessionUser {
            id: student.id + 1000,
            role: Role::Instructor,
        })
        .await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests admin seeding only happens while no admin exists.
///
/// Expected: true on first call, false on the second
#[tokio::test]
async fn seeds_first_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    assert!(service.seed_admin("root", "Admin#0001").await?);
    assert!(!service.seed_admin("other", "Admin#0002").await?);

    let admin = service
        .admin_login(credentials("root", "Admin#0001"))
        .await?;
    assert_eq!(admin.role, Role::Admin);

    Ok(())
}
