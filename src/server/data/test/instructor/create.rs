use super::*;

/// Tests creating an instructor and reading it back.
///
/// Expected: Ok with the stored profile returned by `find_by_id`
#[tokio::test]
async fn creates_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let instructor = repo
        .create(
            &CreateInstructorParams {
                name: "Marie Curie".to_string(),
                email: "marie@example.com".to_string(),
                phone: "5511988887777".to_string(),
                username: "mcurie".to_string(),
                password: "unused".to_string(),
            },
            "stored-hash".to_string(),
        )
        .await?;

    let found = repo.find_by_id(instructor.id).await?.unwrap();
    assert_eq!(found.name, "Marie Curie");
    assert_eq!(found.email, instructor.email);

    let stored = repo.find_by_username("mcurie").await?.unwrap();
    assert_eq!(stored.password_hash, "stored-hash");

    Ok(())
}

/// Tests an instructor's contact values are reported as taken.
///
/// Expected: true for the used email, false for fresh values
#[tokio::test]
async fn detects_taken_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::instructor::InstructorFactory::new(db)
        .email("used@example.com")
        .build()
        .await?;

    let repo = InstructorRepository::new(db);

    assert!(repo.contact_taken(Some("used@example.com"), None, None, None).await?);
    assert!(
        !repo
            .contact_taken(Some("used@example.com"), None, None, Some(existing.id))
            .await?
    );
    assert!(!repo.contact_taken(None, Some("fresh"), None, None).await?);

    Ok(())
}
