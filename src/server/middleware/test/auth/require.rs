use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user(SessionUser {
            id: 77,
            role: Role::Student,
        })
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Student])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase { user_id, role })) => {
            assert_eq!(user_id, 77);
            assert_eq!(role, Role::Student);
        }
        other => panic!("Expected UserNotInDatabase, got {:?}", other),
    }

    Ok(())
}

/// Tests a student passes a student-only check on their own resource.
///
/// Expected: Ok(AuthenticatedUser)
#[tokio::test]
async fn grants_owner_with_matching_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::student::StudentFactory::new(db)
        .name("Grace Hopper")
        .build()
        .await?;
    AuthSession::new(session)
        .set_user(SessionUser {
            id: student.id,
            role: Role::Student,
        })
        .await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Student, Permission::Owner(student.id)])
        .await?;

    assert_eq!(user.id, student.id);
    assert_eq!(user.name, "Grace Hopper");
    assert_eq!(user.role, Role::Student);

    Ok(())
}

/// Tests a student hitting an instructor endpoint.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_wrong_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session)
        .set_user(SessionUser {
            id: student.id,
            role: Role::Student,
        })
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Instructor])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, student.id);
            assert!(message.contains("instructor"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests a student acting on another student's resource.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    AuthSession::new(session)
        .set_user(SessionUser {
            id: student.id,
            role: Role::Student,
        })
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Student, Permission::Owner(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin passes the admin check.
///
/// Expected: Ok with role admin
#[tokio::test]
async fn grants_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session)
        .set_user(SessionUser {
            id: admin.id,
            role: Role::Admin,
        })
        .await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, admin.username);

    Ok(())
}
