use super::*;

/// Tests resolving the owner of a token.
///
/// Expected: Ok(Some(user)) for an issued token
#[tokio::test]
async fn finds_token_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::create_user_with_token(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_token(&token).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an unknown token resolves to nobody.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_token("not-a-token").await?.is_none());

    Ok(())
}

/// Tests that deleting a user's tokens revokes them.
///
/// Expected: Ok(None) after the tokens are deleted
#[tokio::test]
async fn revoked_token_no_longer_resolves() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::create_user_with_token(db).await?;

    let deleted = AuthTokenRepository::new(db).delete_for_user(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(UserRepository::new(db).find_by_token(&token).await?.is_none());

    Ok(())
}
