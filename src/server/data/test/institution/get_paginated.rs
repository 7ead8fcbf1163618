use super::*;

/// Tests paging through institutions.
///
/// Verifies that pages are ordered by name and the total counts every match.
///
/// Expected: Ok with two items on the first page and a total of three
#[tokio::test]
async fn pages_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie University", "Alpha University", "Bravo University"] {
        InstitutionFactory::new(db).name(name).build().await?;
    }

    let repo = InstitutionRepository::new(db);
    let (first, total) = repo
        .get_paginated(None, Pagination::new(Some(0), Some(2)))
        .await?;
    let (second, _) = repo
        .get_paginated(None, Pagination::new(Some(1), Some(2)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Alpha University");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Charlie University");

    Ok(())
}

/// Tests filtering by category, ignoring case.
///
/// Expected: Ok with only the matching institution
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InstitutionFactory::new(db)
        .category("College")
        .build()
        .await?;
    let university = InstitutionFactory::new(db)
        .category("University")
        .build()
        .await?;

    let repo = InstitutionRepository::new(db);
    let (institutions, total) = repo
        .get_paginated(Some("university"), Pagination::new(None, None))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(institutions[0].id, university.id);

    Ok(())
}
