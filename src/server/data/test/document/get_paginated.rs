use super::*;

/// Tests narrowing the document list by category and uploader.
///
/// Expected: Ok with only documents matching both filters
#[tokio::test]
async fn filters_by_category_and_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let maths = factory::create_category(db, "Maths").await?;

    let tagged = factory::create_document(db, alice.id).await?;
    let untagged = factory::create_document(db, alice.id).await?;
    let other = factory::create_document(db, bob.id).await?;

    let repo = DocumentRepository::new(db);
    repo.set_categories(tagged.id, &BTreeSet::from([maths.id]))
        .await?;
    repo.set_categories(other.id, &BTreeSet::from([maths.id]))
        .await?;

    let (by_alice, total) = repo
        .get_paginated(None, Some(alice.id), Pagination::new(None, None))
        .await?;
    assert_eq!(total, 2);
    assert!(by_alice.iter().any(|d| d.id == untagged.id));

    let (both, total) = repo
        .get_paginated(Some(maths.id), Some(alice.id), Pagination::new(None, None))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(both[0].id, tagged.id);

    Ok(())
}
