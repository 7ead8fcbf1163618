use super::*;

/// Tests that replacing the head removes the old head from admins and adds the new one.
///
/// Expected: Ok with {creator, new head} as admins
#[tokio::test]
async fn changing_head_swaps_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let old_head = factory::create_user(db).await?;
    let new_head = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let service = SchoolService::new(db);
    let school = service
        .create(CreateSchoolParams {
            name: "Medicine".to_string(),
            institution_id: institution.id,
            head: Some(Lookup::Id(old_head.id)),
            secretary: None,
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await?;

    let updated = service
        .update(
            school.id,
            UpdateSchoolParams {
                head: Some(Some(Lookup::Id(new_head.id))),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.head.as_ref().map(|user| user.id), Some(new_head.id));
    assert_eq!(admin_ids(&updated), BTreeSet::from([creator.id, new_head.id]));

    Ok(())
}

/// Tests that a head who is also the creator keeps admin status after the head changes.
///
/// Expected: Ok with the creator still an admin
#[tokio::test]
async fn creator_stays_admin_after_head_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let new_head = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let service = SchoolService::new(db);
    let school = service
        .create(CreateSchoolParams {
            name: "Arts".to_string(),
            institution_id: institution.id,
            head: Some(Lookup::Id(creator.id)),
            secretary: None,
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await?;

    let updated = service
        .update(
            school.id,
            UpdateSchoolParams {
                head: Some(Some(Lookup::Id(new_head.id))),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(admin_ids(&updated), BTreeSet::from([creator.id, new_head.id]));

    Ok(())
}
