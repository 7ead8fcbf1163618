use super::*;

/// Tests registering an account and authenticating with the issued token.
///
/// Expected: Ok with the token resolving to the new user
#[tokio::test]
async fn issues_working_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issued = AccountService::new(db)
        .register(RegisterParams {
            username: " ada ".to_string(),
            email: Some("".to_string()),
        })
        .await?;

    assert_eq!(issued.user.username, "ada");
    assert_eq!(issued.user.email, None);

    let user = UserRepository::new(db)
        .find_by_token(&issued.token)
        .await?
        .unwrap();
    assert_eq!(user.id, issued.user.id);

    Ok(())
}

/// Tests that usernames are unique ignoring case.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(RegisterParams {
            username: "grace".to_string(),
            email: None,
        })
        .await?;

    let result = service
        .register(RegisterParams {
            username: "Grace".to_string(),
            email: None,
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "A user with that username already exists.")
        }
        other => panic!("expected BadRequest, got {:?}", other.map(|t| t.user.id)),
    }

    Ok(())
}

/// Tests that rotating a token invalidates the previous one.
///
/// Expected: Ok with only the new token resolving
#[tokio::test]
async fn rotation_revokes_old_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let issued = service
        .register(RegisterParams {
            username: "linus".to_string(),
            email: None,
        })
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_token(&issued.token).await?.unwrap();
    let rotated = service.rotate_token(user).await?;

    assert_ne!(rotated.token, issued.token);
    assert!(repo.find_by_token(&issued.token).await?.is_none());
    assert!(repo.find_by_token(&rotated.token).await?.is_some());

    Ok(())
}
