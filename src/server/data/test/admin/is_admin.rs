use super::*;

/// Tests admin membership checks on a club.
///
/// Verifies that the club creator is reported as admin while another member
/// without the admin row is not.
///
/// Expected: Ok(true) for the creator, Ok(false) for the plain member
#[tokio::test]
async fn distinguishes_admins_from_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;
    factory::club::add_member(db, club.id, member.id).await?;

    let repo = AdminRepository::new(db);

    assert!(
        repo.is_admin(AdminScope::ClubSociety(club.id), creator.id)
            .await?
    );
    assert!(
        !repo
            .is_admin(AdminScope::ClubSociety(club.id), member.id)
            .await?
    );

    Ok(())
}

/// Tests that admin status does not leak between scopes.
///
/// Expected: Ok(false) when checking a different institution
#[tokio::test]
async fn is_scoped_to_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let _mine = factory::create_institution(db, owner.id).await?;
    let theirs = factory::create_institution(db, other.id).await?;

    let repo = AdminRepository::new(db);

    assert!(
        !repo
            .is_admin(AdminScope::Institution(theirs.id), owner.id)
            .await?
    );

    Ok(())
}
