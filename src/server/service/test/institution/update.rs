use super::*;

/// Tests that a default admin cannot be removed while holding the role.
///
/// Expected: Ok with the chancellor still an admin and the plain admin removed
#[tokio::test]
async fn remove_admins_skips_role_holders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let chancellor = factory::create_user(db).await?;
    let plain = factory::create_user(db).await?;

    let service = InstitutionService::new(db);
    let institution = service
        .create(CreateInstitutionParams {
            category: "University".to_string(),
            name: "Eastgate".to_string(),
            chancellor: Some(Lookup::Id(chancellor.id)),
            vice_chancellor: None,
            admins: vec![Lookup::Id(plain.id)],
            created_by: creator.id,
        })
        .await?;

    let updated = service
        .update(
            institution.id,
            UpdateInstitutionParams {
                remove_admins: vec![Lookup::Id(chancellor.id), Lookup::Id(plain.id)],
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    let names = admin_names(&updated);
    assert!(names.contains(&chancellor.username));
    assert!(names.contains(&creator.username));
    assert!(!names.contains(&plain.username));

    Ok(())
}

/// Tests that changing the chancellor swaps admins, and that repeating it changes nothing.
///
/// Expected: Ok with the old chancellor removed and the new one added, twice over
#[tokio::test]
async fn changing_chancellor_swaps_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let old = factory::create_user(db).await?;
    let new = factory::create_user(db).await?;

    let service = InstitutionService::new(db);
    let institution = service
        .create(CreateInstitutionParams {
            category: "University".to_string(),
            name: "Westbrook".to_string(),
            chancellor: Some(Lookup::Id(old.id)),
            vice_chancellor: None,
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await?;

    let params = UpdateInstitutionParams {
        chancellor: Some(Some(Lookup::Id(new.id))),
        ..Default::default()
    };

    let first = service
        .update(institution.id, params.clone())
        .await?
        .unwrap();
    let second = service.update(institution.id, params).await?.unwrap();

    let expected = BTreeSet::from([creator.username.clone(), new.username.clone()]);
    assert_eq!(admin_names(&first), expected);
    assert_eq!(admin_names(&second), expected);

    Ok(())
}

/// Tests that clearing a role removes its holder from the admins.
///
/// Expected: Ok with no chancellor and only the creator left as admin
#[tokio::test]
async fn clearing_chancellor_removes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let chancellor = factory::create_user(db).await?;

    let service = InstitutionService::new(db);
    let institution = service
        .create(CreateInstitutionParams {
            category: "University".to_string(),
            name: "Southmoor".to_string(),
            chancellor: Some(Lookup::Id(chancellor.id)),
            vice_chancellor: None,
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await?;

    let updated = service
        .update(
            institution.id,
            UpdateInstitutionParams {
                chancellor: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.chancellor.is_none());
    assert_eq!(
        admin_names(&updated),
        BTreeSet::from([creator.username.clone()])
    );

    Ok(())
}

/// Tests updating an institution that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InstitutionService::new(db)
        .update(404, UpdateInstitutionParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
