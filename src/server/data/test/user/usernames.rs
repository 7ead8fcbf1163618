use super::*;

/// Tests batch username resolution.
///
/// Verifies that duplicates are collapsed, unknown ids are skipped and the
/// result is sorted by username.
///
/// Expected: Ok with the two known users in username order
#[tokio::test]
async fn resolves_known_ids_sorted_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zed = factory::create_user_named(db, "zed").await?;
    let amy = factory::create_user_named(db, "amy").await?;

    let repo = UserRepository::new(db);
    let users = repo.usernames([zed.id, amy.id, zed.id, 999]).await?;
    let resolved = users.all([zed.id, amy.id, 999]);

    let names: Vec<&str> = resolved.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "zed"]);
    assert!(users.get(Some(999)).is_none());

    Ok(())
}
