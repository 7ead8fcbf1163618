use super::*;

/// Tests that a bulk create with a stored duplicate creates nothing.
///
/// Expected: Err(BadRequest) and only the pre-existing category stored
#[tokio::test]
async fn bulk_create_is_atomic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "History").await?;

    let service = CategoryService::new(db);
    let result = service
        .bulk_create(&["Geography".to_string(), "HISTORY".to_string()])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let names: Vec<String> = service
        .get_all()
        .await?
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["History".to_string()]);

    Ok(())
}

/// Tests that names repeated within one bulk request are rejected.
///
/// Expected: Err(BadRequest) naming the repeated entry
#[tokio::test]
async fn bulk_create_rejects_repeats_in_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryService::new(db)
        .bulk_create(&["Art".to_string(), "art".to_string()])
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "Duplicate category names in the request: art.")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests that bulk delete matches names ignoring case and reports misses.
///
/// Expected: Ok with the stored spelling under deleted and the unknown name under not_found
#[tokio::test]
async fn bulk_delete_is_case_insensitive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "Economics").await?;
    factory::create_category(db, "Music").await?;

    let service = CategoryService::new(db);
    let result = service
        .bulk_delete(&["economics".to_string(), "Astronomy".to_string()])
        .await?;

    assert_eq!(result.deleted, vec!["Economics".to_string()]);
    assert_eq!(result.not_found, vec!["Astronomy".to_string()]);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
