use super::*;

/// Tests clearing a role column.
///
/// Expected: Ok with the chancellor cleared and the name untouched
#[tokio::test]
async fn clears_role_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chancellor = factory::create_user(db).await?;
    let institution = InstitutionFactory::new(db)
        .chancellor(Some(chancellor.id))
        .build()
        .await?;
    let name = institution.name.clone();

    let repo = InstitutionRepository::new(db);
    let updated = repo
        .update(
            institution,
            InstitutionChanges {
                chancellor_id: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.chancellor_id.is_none());
    assert_eq!(updated.name, name);

    Ok(())
}

/// Tests an update with no changes.
///
/// Expected: Ok with the original model returned unchanged
#[tokio::test]
async fn empty_changes_return_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institution = InstitutionFactory::new(db).build().await?;

    let repo = InstitutionRepository::new(db);
    let updated = repo
        .update(institution.clone(), InstitutionChanges::default())
        .await?;

    assert_eq!(updated, institution);

    Ok(())
}
