use super::*;

/// Tests replacing an admin set.
///
/// Verifies that only the difference is written and that the returned diff
/// reports the users added and removed.
///
/// Expected: Ok with the stored set equal to the requested one
#[tokio::test]
async fn writes_only_the_difference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let added = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let repo = AdminRepository::new(db);
    let scope = AdminScope::Institution(institution.id);

    let diff = repo.replace(scope, &BTreeSet::from([added.id])).await?;

    assert_eq!(
        diff,
        AdminDiff {
            added: BTreeSet::from([added.id]),
            removed: BTreeSet::from([creator.id]),
        }
    );
    assert_eq!(repo.get_admin_ids(scope).await?, BTreeSet::from([added.id]));

    Ok(())
}

/// Tests replacing an admin set with itself.
///
/// Expected: Ok with an empty diff
#[tokio::test]
async fn is_noop_for_same_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let institution = factory::create_institution(db, creator.id).await?;

    let repo = AdminRepository::new(db);
    let diff = repo
        .replace(
            AdminScope::Institution(institution.id),
            &BTreeSet::from([creator.id]),
        )
        .await?;

    assert!(diff.is_empty());

    Ok(())
}
