use super::*;

/// Tests each contact field alone detects a clash.
///
/// Expected: true for a matching email, username or phone
#[tokio::test]
async fn detects_each_taken_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .email("taken@example.com")
        .username("taken")
        .phone("1199998888")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.contact_taken(Some("taken@example.com"), None, None, None).await?);
    assert!(repo.contact_taken(None, Some("taken"), None, None).await?);
    assert!(repo.contact_taken(None, None, Some("1199998888"), None).await?);
    assert!(
        !repo
            .contact_taken(Some("free@example.com"), Some("free"), Some("1100000000"), None)
            .await?
    );

    Ok(())
}

/// Tests the excluded id is ignored so a profile can keep its own values.
///
/// Expected: false when only the excluded student matches
#[tokio::test]
async fn ignores_excluded_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .email("self@example.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(
        !repo
            .contact_taken(Some("self@example.com"), None, None, Some(student.id))
            .await?
    );

    Ok(())
}

/// Tests a check with no values never matches.
///
/// Expected: false
#[tokio::test]
async fn returns_false_without_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student(db).await?;

    assert!(
        !StudentRepository::new(db)
            .contact_taken(None, None, None, None)
            .await?
    );

    Ok(())
}
