use super::*;

/// Tests that the creator cannot be removed from the admins of their club.
///
/// Expected: Ok with the creator still an admin and a member
#[tokio::test]
async fn creator_cannot_be_removed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let service = ClubService::new(db);
    let club = service.create(params("Rowing", creator.id)).await?;

    let updated = service
        .update(
            club.id,
            UpdateClubParams {
                remove_admins: vec![Lookup::Id(creator.id)],
                remove_members: vec![Lookup::Id(creator.id)],
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(admin_ids(&updated).contains(&creator.id));
    assert!(member_ids(&updated).contains(&creator.id));

    Ok(())
}

/// Tests that adding an admin also adds them as a member, and removing an admin keeps
/// their membership.
///
/// Expected: Ok with the promoted user a member before and after demotion
#[tokio::test]
async fn admin_changes_keep_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let service = ClubService::new(db);
    let club = service.create(params("Debate", creator.id)).await?;

    let promoted = service
        .update(
            club.id,
            UpdateClubParams {
                admins: vec![Lookup::Id(user.id)],
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert!(admin_ids(&promoted).contains(&user.id));
    assert!(member_ids(&promoted).contains(&user.id));

    let demoted = service
        .update(
            club.id,
            UpdateClubParams {
                remove_admins: vec![Lookup::Id(user.id)],
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert!(!admin_ids(&demoted).contains(&user.id));
    assert!(member_ids(&demoted).contains(&user.id));

    Ok(())
}

/// Tests that profile fields left out of a patch keep their values.
///
/// Expected: Ok with only the bio changed
#[tokio::test]
async fn profile_patch_is_partial() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let service = ClubService::new(db);
    let club = service
        .create(CreateClubParams {
            profile: ClubProfile {
                bio: "Weekly hikes".to_string(),
                website: "https://hikers.example".to_string(),
                ..Default::default()
            },
            ..params("Hikers", creator.id)
        })
        .await?;

    let mut params = UpdateClubParams::default();
    params.profile.bio = Some("Weekend hikes".to_string());

    let updated = service.update(club.id, params).await?.unwrap();

    assert_eq!(updated.profile.bio, "Weekend hikes");
    assert_eq!(updated.profile.website, "https://hikers.example");
    assert_eq!(updated.name, "Hikers");

    Ok(())
}
