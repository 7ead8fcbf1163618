use super::*;

/// Tests that role holders and the creator become admins of a new institution.
///
/// Expected: Ok with chancellor, vice-chancellor, creator and the extra admin all in admins
#[tokio::test]
async fn role_holders_become_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user_named(db, "ucreator").await?;
    factory::user::create_user_named(db, "cchancellor").await?;
    let vice = factory::user::create_user_named(db, "vvice").await?;
    factory::user::create_user_named(db, "extra").await?;

    let institution = InstitutionService::new(db)
        .create(CreateInstitutionParams {
            category: "University".to_string(),
            name: "Northfield".to_string(),
            chancellor: Some(Lookup::Name("CChancellor".to_string())),
            vice_chancellor: Some(Lookup::Id(vice.id)),
            admins: vec![Lookup::Name("extra".to_string())],
            created_by: creator.id,
        })
        .await?;

    assert_eq!(
        admin_names(&institution),
        BTreeSet::from([
            "cchancellor".to_string(),
            "vvice".to_string(),
            "ucreator".to_string(),
            "extra".to_string(),
        ])
    );
    assert_eq!(
        institution.chancellor.map(|user| user.username).as_deref(),
        Some("cchancellor")
    );

    Ok(())
}

/// Tests that institution names are unique ignoring case.
///
/// Expected: Err(BadRequest) for the second institution
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let service = InstitutionService::new(db);
    let params = CreateInstitutionParams {
        category: "College".to_string(),
        name: "Riverside".to_string(),
        chancellor: None,
        vice_chancellor: None,
        admins: Vec::new(),
        created_by: creator.id,
    };

    service.create(params.clone()).await?;
    let result = service
        .create(CreateInstitutionParams {
            name: "RIVERSIDE".to_string(),
            ..params
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "An institution with this name already exists.")
        }
        other => panic!("expected BadRequest, got {:?}", other.map(|i| i.id)),
    }

    Ok(())
}

/// Tests that an unknown chancellor reference is a client error.
///
/// Expected: Err(BadRequest) naming the missing user
#[tokio::test]
async fn rejects_unknown_chancellor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let result = InstitutionService::new(db)
        .create(CreateInstitutionParams {
            category: "College".to_string(),
            name: "Lakeside".to_string(),
            chancellor: Some(Lookup::Name("nobody".to_string())),
            vice_chancellor: None,
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "User 'nobody' does not exist."),
        other => panic!("expected BadRequest, got {:?}", other.map(|i| i.id)),
    }

    Ok(())
}
