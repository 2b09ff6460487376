use super::*;

/// Tests pages are cut by name order and report the total.
///
/// Expected: page 0 holds the first two names, page 1 the third
#[tokio::test]
async fn pages_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Carla", "Alice", "Bruno"] {
        factory::student::StudentFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let (first_page, total) = repo.get_paginated(0, 2).await?;
    let (second_page, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = first_page.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bruno"]);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Carla");

    Ok(())
}

/// Tests a page past the end is empty but still reports the total.
///
/// Expected: Ok((vec![], 1))
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student(db).await?;

    let (students, total) = StudentRepository::new(db).get_paginated(5, 10).await?;

    assert!(students.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
