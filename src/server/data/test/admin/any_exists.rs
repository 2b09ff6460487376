use super::*;

/// Tests an empty admin table.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!AdminRepository::new(db).any_exists().await?);

    Ok(())
}

/// Tests an admin created through the repository is detected and found.
///
/// Expected: Ok(true) and the admin found by id and username
#[tokio::test]
async fn returns_true_after_create() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo
        .create("root".to_string(), "stored-hash".to_string())
        .await?;

    assert!(repo.any_exists().await?);
    assert_eq!(repo.find_by_id(admin.id).await?, Some(admin));
    assert_eq!(
        repo.find_by_username("root").await?.unwrap().password_hash,
        "stored-hash"
    );

    Ok(())
}
