use super::*;

/// Tests that giving only a department fills in its school and institution.
///
/// Expected: Ok with the whole path resolved
#[tokio::test]
async fn department_implies_parents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let (institution, school, department) =
        factory::helpers::create_hierarchy_for_user(db, &admin).await?;

    let student = StudentService::new(db)
        .create(CreateStudentParams {
            department: Some(Lookup::Id(department.id)),
            ..enrol(user.id)
        })
        .await?;

    assert_eq!(student.institution.map(|i| i.id), Some(institution.id));
    assert_eq!(student.school.map(|s| s.id), Some(school.id));
    assert_eq!(student.department.map(|d| d.id), Some(department.id));

    Ok(())
}

/// Tests that a school from another institution is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_school_outside_institution() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let home = factory::create_institution(db, admin.id).await?;
    let other = factory::create_institution(db, admin.id).await?;
    let foreign_school = SchoolFactory::new(db, other.id)
        .created_by(Some(admin.id))
        .build()
        .await?;

    let result = StudentService::new(db)
        .create(CreateStudentParams {
            institution: Some(Lookup::Id(home.id)),
            school: Some(Lookup::Id(foreign_school.id)),
            ..enrol(user.id)
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(
            msg,
            "The school must belong to the student's institution."
        ),
        other => panic!("expected BadRequest, got {:?}", other.map(|s| s.id)),
    }

    Ok(())
}

/// Tests that a user can only have one student profile.
///
/// Expected: Err(BadRequest) for the second profile
#[tokio::test]
async fn one_profile_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = StudentService::new(db);

    service.create(enrol(user.id)).await?;

    assert!(matches!(
        service.create(enrol(user.id)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests clearing the department while keeping the rest of the placement.
///
/// Expected: Ok with the department cleared and the school kept
#[tokio::test]
async fn update_clears_single_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let (_, school, department) = factory::helpers::create_hierarchy_for_user(db, &admin).await?;

    let service = StudentService::new(db);
    let student = service
        .create(CreateStudentParams {
            department: Some(Lookup::Id(department.id)),
            ..enrol(user.id)
        })
        .await?;

    let updated = service
        .update(
            student.id,
            UpdateStudentParams {
                department: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.department.is_none());
    assert_eq!(updated.school.map(|s| s.id), Some(school.id));

    Ok(())
}

/// Tests listing students by institution.
///
/// Expected: Ok with only the placed student, and an empty list for an unknown institution
#[tokio::test]
async fn lists_by_institution() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let placed = factory::create_user(db).await?;
    let unplaced = factory::create_user(db).await?;
    let institution = factory::create_institution(db, admin.id).await?;

    let service = StudentService::new(db);
    service
        .create(CreateStudentParams {
            institution: Some(Lookup::Name(institution.name.clone())),
            ..enrol(placed.id)
        })
        .await?;
    service.create(enrol(unplaced.id)).await?;

    let listed = service
        .get_all(StudentFilter {
            institution: Some(Lookup::Id(institution.id)),
            ..Default::default()
        })
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user.id, placed.id);

    let unknown = service
        .get_all(StudentFilter {
            institution: Some(Lookup::Name("Nowhere".to_string())),
            ..Default::default()
        })
        .await?;
    assert!(unknown.is_empty());

    Ok(())
}
