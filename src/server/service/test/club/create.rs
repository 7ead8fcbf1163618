use super::*;

/// Tests that the creator and every admin end up as members.
///
/// Expected: Ok with every admin also a member, the creator included
#[tokio::test]
async fn admins_are_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;

    let club = ClubService::new(db)
        .create(CreateClubParams {
            admins: vec![Lookup::Id(admin.id)],
            members: vec![Lookup::Name(member.username.clone())],
            ..params("Chess Society", creator.id)
        })
        .await?;

    assert_eq!(admin_ids(&club), BTreeSet::from([creator.id, admin.id]));
    assert_eq!(
        member_ids(&club),
        BTreeSet::from([creator.id, admin.id, member.id])
    );

    Ok(())
}

/// Tests that club names are unique within the same institution.
///
/// Expected: Err(BadRequest) for the duplicate
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let service = ClubService::new(db);
    let in_institution = CreateClubParams {
        institution: Some(Lookup::Id(institution.id)),
        ..params("Drama Club", creator.id)
    };
    service.create(in_institution.clone()).await?;

    assert!(matches!(
        service.create(in_institution).await,
        Err(AppError::BadRequest(_))
    ));

    // The same name without an institution is a different scope
    service.create(params("Drama Club", creator.id)).await?;

    Ok(())
}
