use super::*;
use sea_orm::EntityTrait;

fn params(email: &str, username: &str, phone: &str) -> CreateStudentParams {
    CreateStudentParams {
        name: "Grace Hopper".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        username: username.to_string(),
        password: "Secret#123".to_string(),
        areas_of_interest: vec!["Compilers".to_string()],
    }
}

/// Tests registration stores an argon2 hash, never the plaintext.
///
/// Expected: Ok and the stored hash verifies against the password
#[tokio::test]
async fn registers_student_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentService::new(db)
        .create(params("grace@example.com", "ghopper", "1199990000"))
        .await?;

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "Secret#123");
    assert!(verify_password("Secret#123", &stored.password_hash).await?);

    Ok(())
}

/// Tests each reused contact value blocks a second registration.
///
/// Expected: Err(BadRequest) for reused email, username and phone
#[tokio::test]
async fn rejects_duplicate_contact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .email("taken@example.com")
        .username("taken")
        .phone("1188887777")
        .build()
        .await?;

    let service = StudentService::new(db);
    for attempt in [
        params("taken@example.com", "fresh1", "1100000001"),
        params("fresh2@example.com", "taken", "1100000002"),
        params("fresh3@example.com", "fresh3", "1188887777"),
    ] {
        let result = service.create(attempt).await;
        match result {
            Err(AppError::BadRequest(message)) => {
                assert_eq!(message, "Student already registered")
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    Ok(())
}

/// Tests the admin listing clamps oversized pages.
///
/// Expected: per_page reported as 100
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student(db).await?;

    let page = StudentService::new(db).get_paginated(0, 1000).await?;

    assert_eq!(page.per_page, 100);
    assert_eq!(page.total, 1);
    assert_eq!(page.students.len(), 1);

    Ok(())
}
