use super::*;

/// Tests uploading a document without a title.
///
/// Expected: Ok with the title taken from the file name and categories attached
#[tokio::test]
async fn title_defaults_to_filename() -> Result<(), AppError> {
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
    factory::create_category(db, "Maths").await?;

    let document = DocumentService::new(db, &storage, &url)
        .upload(UploadDocumentParams {
            categories: vec!["maths".to_string(), "Algebra".to_string()],
            ..upload(user.id, "lecture-notes.v2.pdf", None)
        })
        .await?;

    assert_eq!(document.title, "lecture-notes");
    assert_eq!(document.original_filename, "lecture-notes.v2.pdf");
    assert_eq!(document.categories, vec!["Algebra", "Maths"]);
    assert_eq!(
        document.download_url,
        format!("http://localhost:8080/api/documents/{}/download", document.id)
    );
    assert!(dir.path().join(&document.file_key).exists());

    Ok(())
}

/// Tests re-uploading a title the same user already used.
///
/// Expected: Err(DuplicateTitle) with the short message and the existing document linked
#[tokio::test]
async fn duplicate_title_same_uploader() -> Result<(), AppError> {
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

    let first = service
        .upload(upload(user.id, "a.pdf", Some("Syllabus")))
        .await?;
    let result = service
        .upload(upload(user.id, "b.pdf", Some("syllabus")))
        .await;

    match result {
        Err(AppError::DocumentErr(DocumentError::DuplicateTitle { message, existing })) => {
            assert_eq!(
                message,
                "You have already uploaded a document with the same title."
            );
            assert_eq!(existing.len(), 1);
            assert_eq!(existing[0].id, first.id);
            assert_eq!(existing[0].download_url, first.download_url);
        }
        other => panic!("expected DuplicateTitle, got {:?}", other.map(|d| d.id)),
    }

    Ok(())
}

/// Tests uploading a title another user already used.
///
/// Expected: Err(DuplicateTitle) naming the other uploader
#[tokio::test]
async fn duplicate_title_other_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = DocumentStorage::new(dir.path());
    let url = app_url();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = DocumentService::new(db, &storage, &url);

    service
        .upload(upload(owner.id, "a.pdf", Some("Past Papers")))
        .await?;
    let result = service
        .upload(upload(other.id, "b.pdf", Some("Past Papers")))
        .await;

    match result {
        Err(AppError::DocumentErr(DocumentError::DuplicateTitle { message, .. })) => {
            assert_eq!(
                message,
                format!(
                    "A document with the same title was uploaded by {}.",
                    owner.username
                )
            );
        }
        other => panic!("expected DuplicateTitle, got {:?}", other.map(|d| d.id)),
    }

    Ok(())
}

/// Tests uploading without a file part.
///
/// Expected: Err(MissingFile)
#[tokio::test]
async fn missing_file_is_rejected() -> Result<(), AppError> {
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

    let result = DocumentService::new(db, &storage, &url)
        .upload(UploadDocumentParams::new(user.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DocumentErr(DocumentError::MissingFile))
    ));

    Ok(())
}

/// Tests replacing the categories of a document through an update.
///
/// Expected: Ok with only the new categories attached
#[tokio::test]
async fn update_replaces_categories() -> Result<(), AppError> {
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
        .upload(UploadDocumentParams {
            categories: vec!["Chemistry".to_string()],
            ..upload(user.id, "lab.pdf", None)
        })
        .await?;

    let updated = service
        .update(
            document.id,
            UpdateDocumentParams {
                categories: Some(vec![" Physics ".to_string(), "".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.categories, vec!["Physics"]);
    assert_eq!(updated.title, "lab");

    Ok(())
}

/// Tests that a non-ASCII title collides with itself and with an ASCII case change.
///
/// Expected: Err(DuplicateTitle) listing the first document both times
#[tokio::test]
async fn duplicate_non_ascii_title() -> Result<(), AppError> {
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
    let first = service
        .upload(upload(user.id, "a.pdf", Some("Économie")))
        .await?;

    for title in ["Économie", "ÉCONOMIE"] {
        let result = service.upload(upload(user.id, "b.pdf", Some(title))).await;

        match result {
            Err(AppError::DocumentErr(DocumentError::DuplicateTitle { message, existing })) => {
                assert_eq!(
                    message,
                    "You have already uploaded a document with the same title."
                );
                assert_eq!(existing.len(), 1);
                assert_eq!(existing[0].id, first.id);
            }
            other => panic!("expected DuplicateTitle, got {:?}", other.map(|d| d.id)),
        }
    }

    Ok(())
}
