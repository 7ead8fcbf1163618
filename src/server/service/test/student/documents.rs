use super::*;

/// Tests listing the documents a student uploaded as download links.
///
/// Expected: Ok with one entry per uploaded document and none from other users
#[tokio::test]
async fn lists_uploaded_documents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let document = factory::document::DocumentFactory::new(db)
        .title("My Essay")
        .author("Me")
        .uploaded_by(Some(user.id))
        .build()
        .await?;
    factory::create_document(db, other.id).await?;

    let service = StudentService::new(db);
    let student = service.create(enrol(user.id)).await?;
    let url = Url::parse("https://academia.example/").unwrap();

    let documents = service.documents(student.id, &url).await?.unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].title, "My Essay");
    assert_eq!(documents[0].author, "Me");
    assert_eq!(
        documents[0].download_url,
        format!(
            "https://academia.example/api/documents/{}/download",
            document.id
        )
    );

    assert!(service.documents(9999, &url).await?.is_none());

    Ok(())
}
