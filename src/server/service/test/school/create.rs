use super::*;

/// Tests that school names are unique within an institution only.
///
/// Expected: Err(BadRequest) in the same institution, Ok in another one
#[tokio::test]
async fn name_is_unique_per_institution() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_institution(db, user.id).await?;
    let second = factory::create_institution(db, user.id).await?;

    let service = SchoolService::new(db);
    let params = CreateSchoolParams {
        name: "Engineering".to_string(),
        institution_id: first.id,
        head: None,
        secretary: None,
        admins: Vec::new(),
        created_by: user.id,
    };

    service.create(params.clone()).await?;

    let duplicate = service
        .create(CreateSchoolParams {
            name: "engineering".to_string(),
            ..params.clone()
        })
        .await;
    match duplicate {
        Err(AppError::BadRequest(msg)) => assert_eq!(
            msg,
            "A school with this name already exists in this institution."
        ),
        other => panic!("expected BadRequest, got {:?}", other.map(|s| s.id)),
    }

    let elsewhere = service
        .create(CreateSchoolParams {
            institution_id: second.id,
            ..params
        })
        .await?;
    assert_eq!(elsewhere.institution.id, second.id);

    Ok(())
}

/// Tests that head, secretary and creator become admins of a new school.
///
/// Expected: Ok with all three in admins
#[tokio::test]
async fn leadership_becomes_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let head = factory::create_user(db).await?;
    let secretary = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let school = SchoolService::new(db)
        .create(CreateSchoolParams {
            name: "Law".to_string(),
            institution_id: institution.id,
            head: Some(Lookup::Name(head.username.clone())),
            secretary: Some(Lookup::Id(secretary.id)),
            admins: Vec::new(),
            created_by: creator.id,
        })
        .await?;

    assert_eq!(
        admin_ids(&school),
        BTreeSet::from([creator.id, head.id, secretary.id])
    );

    Ok(())
}
