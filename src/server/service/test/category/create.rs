use super::*;

/// Tests that category names are unique ignoring case.
///
/// Expected: Err(BadRequest) for a differently-cased duplicate
#[tokio::test]
async fn rejects_case_insensitive_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "Physics").await?;

    let result = CategoryService::new(db).create("  physics ").await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "A category with this name already exists.")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests renaming a category, including to a different casing of its own name.
///
/// Expected: Ok with the new spelling stored
#[tokio::test]
async fn rename_allows_recasing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db, "biology").await?;

    let renamed = CategoryService::new(db)
        .rename(category.id, "Biology")
        .await?
        .unwrap();

    assert_eq!(renamed.name, "Biology");

    Ok(())
}
