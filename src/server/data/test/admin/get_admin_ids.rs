use super::*;

/// Tests reading admins of each organization level.
///
/// Verifies that the hierarchy factory seeds the creator as admin at every level
/// and that the repository reads them back per scope.
///
/// Expected: Ok with the creator's id for every scope
#[tokio::test]
async fn returns_admins_for_each_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (institution, school, department) =
        factory::helpers::create_hierarchy_for_user(db, &user).await?;

    let repo = AdminRepository::new(db);
    let expected = BTreeSet::from([user.id]);

    assert_eq!(
        repo.get_admin_ids(AdminScope::Institution(institution.id))
            .await?,
        expected
    );
    assert_eq!(
        repo.get_admin_ids(AdminScope::School(school.id)).await?,
        expected
    );
    assert_eq!(
        repo.get_admin_ids(AdminScope::Department(department.id))
            .await?,
        expected
    );

    Ok(())
}

/// Tests reading admins of a record that has none.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn returns_empty_set_for_unknown_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admins = repo.get_admin_ids(AdminScope::School(999)).await?;

    assert!(admins.is_empty());

    Ok(())
}
