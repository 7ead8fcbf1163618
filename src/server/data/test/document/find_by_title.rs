use super::*;

/// Tests that title lookup ignores case and surrounding whitespace.
///
/// Expected: Ok with the single matching document
#[tokio::test]
async fn ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let document = DocumentFactory::new(db)
        .title("Lecture Notes")
        .build()
        .await?;

    let found = DocumentRepository::new(db)
        .find_by_title("  lecture NOTES ")
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, document.id);

    Ok(())
}
