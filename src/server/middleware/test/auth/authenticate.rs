use super::*;

/// Tests that a known token resolves to its owner.
///
/// Expected: Ok(User) matching the token's account
#[tokio::test]
async fn resolves_token_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::create_user_with_token(db).await?;
    let token = BearerToken(token);

    let authenticated = AuthGuard::new(db, &token).authenticate().await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests that an unknown token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_token(db).await?;
    let token = BearerToken("not-a-token".to_string());

    let result = AuthGuard::new(db, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
