use super::*;

/// Tests that an existing category is reused regardless of case.
///
/// Expected: Ok with the existing row and its original spelling
#[tokio::test]
async fn reuses_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db, "Physics").await?;

    let repo = CategoryRepository::new(db);
    let category = repo.find_or_create("physics").await?;

    assert_eq!(category.id, existing.id);
    assert_eq!(category.name, "Physics");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that a new name creates a category.
///
/// Expected: Ok with a new row
#[tokio::test]
async fn creates_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.find_or_create("Chemistry").await?;

    assert_eq!(category.name, "Chemistry");
    assert!(repo.find_by_id(category.id).await?.is_some());

    Ok(())
}

/// Tests that a name with non-ASCII letters is found again instead of inserted twice.
///
/// Expected: Ok with one row reused for the exact and the upper-cased spelling
#[tokio::test]
async fn reuses_non_ascii_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let first = repo.find_or_create("Économie").await?;
    let again = repo.find_or_create("Économie").await?;
    let shouted = repo.find_or_create("ÉCONOMIE").await?;

    assert_eq!(again.id, first.id);
    assert_eq!(shouted.id, first.id);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
