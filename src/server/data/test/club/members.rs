use super::*;

/// Tests replacing a club's members.
///
/// Expected: Ok with the stored member set equal to the requested one
#[tokio::test]
async fn set_members_replaces_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let joiner = factory::create_user(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;

    let repo = ClubRepository::new(db);
    repo.set_members(club.id, &BTreeSet::from([creator.id, joiner.id]))
        .await?;

    assert_eq!(
        repo.get_member_ids(club.id).await?,
        BTreeSet::from([creator.id, joiner.id])
    );
    assert!(repo.is_member(club.id, joiner.id).await?);

    repo.remove_members(club.id, &BTreeSet::from([joiner.id]))
        .await?;

    assert!(!repo.is_member(club.id, joiner.id).await?);

    Ok(())
}
