use super::*;

/// Tests finding an institution whose name contains non-ASCII letters.
///
/// Expected: Ok(Some) for the stored spelling and for a different ASCII case
#[tokio::test]
async fn matches_non_ascii_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institution = InstitutionFactory::new(db)
        .name("Université Côte d'Azur")
        .build()
        .await?;

    let repo = InstitutionRepository::new(db);

    let exact = repo.find_by_name("Université Côte d'Azur").await?;
    let upper = repo.find_by_name("UNIVERSITé CôTE D'AZUR").await?;

    assert_eq!(exact.map(|i| i.id), Some(institution.id));
    assert_eq!(upper.map(|i| i.id), Some(institution.id));
    assert!(repo.find_by_name("Université Nice").await?.is_none());

    Ok(())
}
