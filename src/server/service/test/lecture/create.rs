use super::*;

/// Tests scheduling a lecture with an attached document.
///
/// Expected: Ok with the lecturer, unit and document resolved
#[tokio::test]
async fn schedules_lecture() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;
    let uploader = factory::create_user(db).await?;
    let document = factory::document::DocumentFactory::new(db)
        .title("Slides")
        .uploaded_by(Some(uploader.id))
        .build()
        .await?;

    let lecture = LectureService::new(db)
        .create(CreateLectureParams {
            documents: vec![Lookup::Name("slides".to_string())],
            ..params(&fixture, "Introduction")
        })
        .await?;

    assert_eq!(lecture.lecturer_id, fixture.lecturer_id);
    assert_eq!(lecture.unit.id, fixture.unit_id);
    assert_eq!(lecture.documents.len(), 1);
    assert_eq!(lecture.documents[0].id, document.id);

    Ok(())
}

/// Tests that a lecture must end after it starts.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;

    let result = LectureService::new(db)
        .create(CreateLectureParams {
            start_time: time(11),
            end_time: time(11),
            ..params(&fixture, "Backwards")
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "A lecture must end after it starts."),
        other => panic!("expected BadRequest, got {:?}", other.map(|l| l.id)),
    }

    Ok(())
}

/// Tests that the same lecturer cannot schedule the same lecture twice on one date.
///
/// Expected: Err(BadRequest) for the second lecture
#[tokio::test]
async fn rejects_duplicate_lecture() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;
    let service = LectureService::new(db);

    service.create(params(&fixture, "Revision")).await?;

    assert!(matches!(
        service.create(params(&fixture, "Revision")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests listing lectures by unit and by lecturer username.
///
/// Expected: Ok with matches for known filters and an empty list for an unknown unit
#[tokio::test]
async fn lists_by_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;
    let service = LectureService::new(db);
    service.create(params(&fixture, "Week 1")).await?;

    let by_unit = service
        .get_all(LectureFilter {
            unit: Some(Lookup::Id(fixture.unit_id)),
            lecturer: None,
        })
        .await?;
    assert_eq!(by_unit.len(), 1);

    let username = by_unit[0].lecturer.username.clone();
    let by_lecturer = service
        .get_all(LectureFilter {
            unit: None,
            lecturer: Some(Lookup::Name(username)),
        })
        .await?;
    assert_eq!(by_lecturer.len(), 1);

    let unknown = service
        .get_all(LectureFilter {
            unit: Some(Lookup::Name("No Such Unit".to_string())),
            lecturer: None,
        })
        .await?;
    assert!(unknown.is_empty());

    Ok(())
}
