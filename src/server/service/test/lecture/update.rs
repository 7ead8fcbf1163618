use super::*;

/// Tests that an update is validated against the merged schedule.
///
/// Expected: Err(BadRequest) when the new end precedes the stored start
#[tokio::test]
async fn validates_merged_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;
    let service = LectureService::new(db);
    let lecture = service.create(params(&fixture, "Seminar")).await?;

    let result = service
        .update(
            lecture.id,
            UpdateLectureParams {
                end_time: Some(time(8)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let moved = service
        .update(
            lecture.id,
            UpdateLectureParams {
                start_time: Some(time(13)),
                end_time: Some(time(15)),
                comments: Some("Moved to the afternoon".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(moved.start_time, time(13));
    assert_eq!(moved.comments, "Moved to the afternoon");

    Ok(())
}

/// Tests that renaming onto another lecture's name and date is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_rename_onto_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = fixture(db).await?;
    let service = LectureService::new(db);
    service.create(params(&fixture, "Part 1")).await?;
    let second = service.create(params(&fixture, "Part 2")).await?;

    let result = service
        .update(
            second.id,
            UpdateLectureParams {
                name: Some("Part 1".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
