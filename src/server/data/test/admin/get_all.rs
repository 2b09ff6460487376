use super::*;

/// Tests admins are listed by username.
///
/// Expected: Ok ordered alphabetically
#[tokio::test]
async fn lists_admins_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .username("zeta")
        .build()
        .await?;
    factory::admin::AdminFactory::new(db)
        .username("alpha")
        .build()
        .await?;

    let admins = AdminRepository::new(db).get_all().await?;

    let names: Vec<_> = admins.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);

    Ok(())
}
