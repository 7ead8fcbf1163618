use super::*;

/// Tests downloading a document by id and by title.
///
/// Expected: Ok with the stored bytes, file name and content type both times
#[tokio::test]
async fn download_by_id_or_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = DocumentStorage::new(dir.path());
    let url = app_url();

    let user = factory::create_user(db).await?;
    let service = DocumentService::new(db, &storage, &url);
    let document = service
        .upload(upload(user.id, "handout.pdf", Some("Week 3 Handout")))
        .await?;

    for lookup in [
        Lookup::Id(document.id),
        Lookup::Name("week 3 handout".to_string()),
    ] {
        let download = service.download(&lookup).await?.unwrap();

        assert_eq!(download.bytes, b"%PDF-1.4 test".to_vec());
        assert_eq!(download.filename, "handout.pdf");
        assert_eq!(download.content_type, "application/pdf");
    }

    assert!(service
        .download(&Lookup::Name("missing".to_string()))
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting a document removes its stored file.
///
/// Expected: Ok(true) and the file gone
#[tokio::test]
async fn delete_removes_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = DocumentStorage::new(dir.path());
    let url = app_url();

    let user = factory::create_user(db).await?;
    let service = DocumentService::new(db, &storage, &url);
    let document = service.upload(upload(user.id, "x.txt", None)).await?;

    assert!(service.delete(document.id).await?);
    assert!(!dir.path().join(&document.file_key).exists());
    assert!(service.get_by_id(document.id).await?.is_none());
    assert!(!service.delete(document.id).await?);

    Ok(())
}

/// Tests downloading by a title with non-ASCII letters.
///
/// Expected: Ok(Some) with the stored bytes
#[tokio::test]
async fn download_by_non_ascii_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = DocumentStorage::new(dir.path());
    let url = app_url();

    let user = factory::create_user(db).await?;
    let service = DocumentService::new(db, &storage, &url);
    service
        .upload(upload(user.id, "notes.pdf", Some("Économie")))
        .await?;

    let file = service
        .download(&Lookup::Name("Économie".to_string()))
        .await?
        .expect("document should be found by its title");

    assert_eq!(file.filename, "notes.pdf");
    assert_eq!(file.bytes, b"%PDF-1.4 test".to_vec());

    Ok(())
}

/// Tests that a file which cannot be removed does not fail the delete.
///
/// Expected: Ok(true) with the row gone and the path left in place
#[tokio::test]
async fn delete_survives_file_removal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = DocumentStorage::new(dir.path());
    let url = app_url();

    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, user.id).await?;
    // A directory at the key makes `remove_file` fail with something other than NotFound.
    std::fs::create_dir(dir.path().join(&document.file_key))?;

    let service = DocumentService::new(db, &storage, &url);

    assert!(service.delete(document.id).await?);
    assert!(service.get_by_id(document.id).await?.is_none());
    assert!(dir.path().join(&document.file_key).is_dir());

    Ok(())
}
