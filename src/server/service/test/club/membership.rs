use super::*;

/// Tests joining and then leaving a club.
///
/// Expected: Ok with the user a member after joining and gone after leaving
#[tokio::test]
async fn join_then_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;

    let service = ClubService::new(db);

    let joined = service.join(club.id, user.id).await?.unwrap();
    assert!(member_ids(&joined).contains(&user.id));

    assert!(matches!(
        service.join(club.id, user.id).await,
        Err(AppError::BadRequest(_))
    ));

    let left = service.leave(club.id, user.id).await?.unwrap();
    assert!(!member_ids(&left).contains(&user.id));

    Ok(())
}

/// Tests that the creator of a club cannot leave it.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn creator_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;

    match ClubService::new(db).leave(club.id, creator.id).await {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "The creator of a club cannot leave it.")
        }
        other => panic!("expected BadRequest, got {:?}", other.map(|c| c.map(|c| c.id))),
    }

    Ok(())
}

/// Tests that a user who is not a member cannot leave.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn non_member_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;

    match ClubService::new(db).leave(club.id, stranger.id).await {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "You are not a member of this club."),
        other => panic!("expected BadRequest, got {:?}", other.map(|c| c.map(|c| c.id))),
    }

    Ok(())
}
