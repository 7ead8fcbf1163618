//! Club/society factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a club named `"Club {id}"`.
///
/// The creator is inserted as both a member and an admin.
pub async fn create_club(
    db: &DatabaseConnection,
    institution_id: Option<i32>,
    created_by: i32,
) -> Result<entity::club_society::Model, DbErr> {
    let club = entity::club_society::ActiveModel {
        name: ActiveValue::Set(format!("Club {}", next_id())),
        institution_id: ActiveValue::Set(institution_id),
        bio: ActiveValue::Set(String::new()),
        location: ActiveValue::Set(String::new()),
        contact_number: ActiveValue::Set(String::new()),
        website: ActiveValue::Set(String::new()),
        facebook: ActiveValue::Set(String::new()),
        twitter: ActiveValue::Set(String::new()),
        instagram: ActiveValue::Set(String::new()),
        tiktok: ActiveValue::Set(String::new()),
        linkedin: ActiveValue::Set(String::new()),
        youtube: ActiveValue::Set(String::new()),
        created_by_id: ActiveValue::Set(Some(created_by)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    add_member(db, club.id, created_by).await?;
    add_admin(db, club.id, created_by).await?;

    Ok(club)
}

/// Adds `user_id` to the club's members.
pub async fn add_member(db: &DatabaseConnection, club_id: i32, user_id: i32) -> Result<(), DbErr> {
    entity::club_society_member::ActiveModel {
        club_society_id: ActiveValue::Set(club_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok(())
}

/// Adds `user_id` to the club's admins. Does not touch membership.
pub async fn add_admin(db: &DatabaseConnection, club_id: i32, user_id: i32) -> Result<(), DbErr> {
    entity::club_society_admin::ActiveModel {
        club_society_id: ActiveValue::Set(club_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
