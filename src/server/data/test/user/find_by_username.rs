use super::*;

/// Tests that username lookup ignores case.
///
/// Expected: Ok(Some(user)) for a differently cased username
#[tokio::test]
async fn ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_named(db, "Ada").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("aDA").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}
