use super::*;

/// Tests writing a club's profile.
///
/// Expected: Ok with the new profile stored and the name kept
#[tokio::test]
async fn stores_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let repo = ClubRepository::new(db);
    let club = repo
        .create(NewClub {
            name: "Chess Club".to_string(),
            institution_id: None,
            profile: ClubProfile::default(),
            created_by_id: Some(creator.id),
        })
        .await?;

    let profile = ClubProfile {
        bio: "Weekly games".to_string(),
        website: "https://chess.example".to_string(),
        ..Default::default()
    };
    let updated = repo
        .update(club, "Chess Club".to_string(), profile.clone())
        .await?;

    assert_eq!(updated.name, "Chess Club");
    assert_eq!(ClubProfile::from_entity(&updated), profile);

    Ok(())
}

/// Tests finding clubs by name within an institution.
///
/// Expected: Ok with only the club of the given institution
#[tokio::test]
async fn find_by_name_respects_institution() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let first = factory::create_institution(db, creator.id).await?;
    let second = factory::create_institution(db, creator.id).await?;

    let repo = ClubRepository::new(db);
    for institution_id in [first.id, second.id] {
        repo.create(NewClub {
            name: "Debate".to_string(),
            institution_id: Some(institution_id),
            profile: ClubProfile::default(),
            created_by_id: Some(creator.id),
        })
        .await?;
    }

    assert_eq!(repo.find_by_name("debate", None).await?.len(), 2);

    let scoped = repo.find_by_name("DEBATE", Some(second.id)).await?;
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].institution_id, Some(second.id));

    Ok(())
}
