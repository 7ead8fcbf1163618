use super::*;

/// Tests that the creator of a hierarchy passes every admin check along it.
///
/// Expected: Ok(User) for institution, school and department admin permissions
#[tokio::test]
async fn grants_access_to_hierarchy_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::create_user_with_token(db).await?;
    let (institution, school, department) =
        factory::helpers::create_hierarchy_for_user(db, &user).await?;
    let token = BearerToken(token);

    let granted = AuthGuard::new(db, &token)
        .require(&[
            Permission::InstitutionAdmin(institution.id),
            Permission::SchoolAdmin(school.id),
            Permission::DepartmentAdmin(department.id),
        ])
        .await?;

    assert_eq!(granted.id, user.id);

    Ok(())
}

/// Tests that a user who is not an admin of the school is denied.
///
/// Expected: Err(AccessDenied) naming the school level
#[tokio::test]
async fn denies_non_admin_naming_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let (_, school, _) = factory::helpers::create_hierarchy_for_user(db, &owner).await?;
    let (_, token) = factory::create_user_with_token(db).await?;
    let token = BearerToken(token);

    let result = AuthGuard::new(db, &token)
        .require(&[Permission::SchoolAdmin(school.id)])
        .await;

    assert_denied(result, "admin of this school");

    Ok(())
}

/// Tests that club admin checks use the club admin set.
///
/// Expected: creator is granted, another user is denied naming the club level
#[tokio::test]
async fn checks_club_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, creator_token) = factory::create_user_with_token(db).await?;
    let (_, other_token) = factory::create_user_with_token(db).await?;
    let club = factory::create_club(db, None, creator.id).await?;

    let creator_token = BearerToken(creator_token);
    let other_token = BearerToken(other_token);

    AuthGuard::new(db, &creator_token)
        .require(&[Permission::ClubAdmin(club.id)])
        .await?;
    let result = AuthGuard::new(db, &other_token)
        .require(&[Permission::ClubAdmin(club.id)])
        .await;

    assert_denied(result, "admin of this club");

    Ok(())
}

/// Tests that only the uploader passes the document owner check.
///
/// Expected: uploader is granted, another user is denied
#[tokio::test]
async fn checks_document_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (uploader, uploader_token) = factory::create_user_with_token(db).await?;
    let (_, other_token) = factory::create_user_with_token(db).await?;
    let document = factory::create_document(db, uploader.id).await?;

    let uploader_token = BearerToken(uploader_token);
    let other_token = BearerToken(other_token);

    AuthGuard::new(db, &uploader_token)
        .require(&[Permission::DocumentOwner(document.id)])
        .await?;
    let result = AuthGuard::new(db, &other_token)
        .require(&[Permission::DocumentOwner(document.id)])
        .await;

    assert_denied(result, "uploader of this document");

    Ok(())
}

/// Tests the profile permission for the owner, an institution admin and a stranger.
///
/// Expected: owner and institution admin are granted, the stranger is denied
#[tokio::test]
async fn profile_owner_or_institution_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, admin_token) = factory::create_user_with_token(db).await?;
    let (owner, owner_token) = factory::create_user_with_token(db).await?;
    let (_, stranger_token) = factory::create_user_with_token(db).await?;
    let institution = factory::create_institution(db, admin.id).await?;

    let permission = || Permission::SelfOrInstitutionAdmin {
        user_id: owner.id,
        institution_id: Some(institution.id),
    };

    for token in [owner_token, admin_token] {
        let token = BearerToken(token);
        AuthGuard::new(db, &token).require(&[permission()]).await?;
    }

    let stranger_token = BearerToken(stranger_token);
    let result = AuthGuard::new(db, &stranger_token)
        .require(&[permission()])
        .await;

    assert_denied(result, "admin of its institution");

    Ok(())
}
