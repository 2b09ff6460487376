use super::*;

/// Tests deleting an instructor.
///
/// Expected: Ok(true) and the instructor gone
#[tokio::test]
async fn deletes_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);

    assert!(repo.delete(instructor.id).await?);
    assert!(repo.find_by_id(instructor.id).await?.is_none());

    Ok(())
}

/// Tests deleting an instructor that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!InstructorRepository::new(db).delete(7).await?);

    Ok(())
}
