use super::*;

/// Tests pagination of instructors ordered by name.
///
/// Expected: Ok with one page of `per_page` entries and the full total
#[tokio::test]
async fn pages_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Turing", "Hopper", "Lovelace"] {
        factory::instructor::InstructorFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let (page, total) = InstructorRepository::new(db).get_paginated(0, 2).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = page.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Hopper", "Lovelace"]);

    Ok(())
}
