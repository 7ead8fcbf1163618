use super::*;

/// Tests replacing document categories and reading their names back.
///
/// Expected: Ok with names sorted and stale links removed
#[tokio::test]
async fn set_categories_replaces_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, user.id).await?;
    let physics = factory::create_category(db, "Physics").await?;
    let maths = factory::create_category(db, "Maths").await?;
    let history = factory::create_category(db, "History").await?;

    let repo = DocumentRepository::new(db);
    repo.set_categories(document.id, &BTreeSet::from([physics.id, history.id]))
        .await?;
    repo.set_categories(document.id, &BTreeSet::from([physics.id, maths.id]))
        .await?;

    let categories = repo.categories_for(vec![document.id]).await?;

    assert_eq!(
        categories.get(&document.id),
        Some(&vec!["Maths".to_string(), "Physics".to_string()])
    );

    Ok(())
}

/// Tests category lookup for documents without categories.
///
/// Expected: Ok with no entry for the document
#[tokio::test]
async fn uncategorized_document_has_no_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, user.id).await?;

    let categories = DocumentRepository::new(db)
        .categories_for(vec![document.id])
        .await?;

    assert!(!categories.contains_key(&document.id));

    Ok(())
}
