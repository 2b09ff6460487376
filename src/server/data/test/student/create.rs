use super::*;

/// Tests creating a student stores the profile and the given hash.
///
/// Expected: Ok with areas of interest preserved in order
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(
            &CreateStudentParams {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone: "5511999990000".to_string(),
                username: "ghopper".to_string(),
                password: "unused".to_string(),
                areas_of_interest: vec!["Compilers".to_string(), "Navy".to_string()],
            },
            "stored-hash".to_string(),
        )
        .await?;

    assert_eq!(student.name, "Grace Hopper");
    assert_eq!(student.areas_of_interest, vec!["Compilers", "Navy"]);

    let stored = repo.find_by_username("ghopper").await?.unwrap();
    assert_eq!(stored.id, student.id);
    assert_eq!(stored.password_hash, "stored-hash");

    Ok(())
}

/// Tests looking up a student that does not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}
