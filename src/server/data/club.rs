//! Club and society data repository.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::filter::iequals, model::club::ClubProfile};

#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub institution_id: Option<i32>,
    pub profile: ClubProfile,
    pub created_by_id: Option<i32>,
}

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewClub) -> Result<entity::club_society::Model, DbErr> {
        let profile = new.profile;

        entity::club_society::ActiveModel {
            name: ActiveValue::Set(new.name),
            institution_id: ActiveValue::Set(new.institution_id),
            bio: ActiveValue::Set(profile.bio),
            location: ActiveValue::Set(profile.location),
            contact_number: ActiveValue::Set(profile.contact_number),
            website: ActiveValue::Set(profile.website),
            facebook: ActiveValue::Set(profile.facebook),
            twitter: ActiveValue::Set(profile.twitter),
            instagram: ActiveValue::Set(profile.instagram),
            tiktok: ActiveValue::Set(profile.tiktok),
            linkedin: ActiveValue::Set(profile.linkedin),
            youtube: ActiveValue::Set(profile.youtube),
            created_by_id: ActiveValue::Set(new.created_by_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::club_society::Model>, DbErr> {
        entity::prelude::ClubSociety::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds clubs by name, ignoring case, optionally within an institution.
    pub async fn find_by_name(
        &self,
        name: &str,
        institution_id: Option<i32>,
    ) -> Result<Vec<entity::club_society::Model>, DbErr> {
        let mut query = entity::prelude::ClubSociety::find().filter(iequals(
            entity::prelude::ClubSociety,
            entity::club_society::Column::Name,
            name,
        ));

        if let Some(institution_id) = institution_id {
            query = query.filter(entity::club_society::Column::InstitutionId.eq(institution_id));
        }

        query.all(self.db).await
    }

    pub async fn get_all(
        &self,
        institution_id: Option<i32>,
    ) -> Result<Vec<entity::club_society::Model>, DbErr> {
        let mut query =
            entity::prelude::ClubSociety::find().order_by_asc(entity::club_society::Column::Name);

        if let Some(institution_id) = institution_id {
            query = query.filter(entity::club_society::Column::InstitutionId.eq(institution_id));
        }

        query.all(self.db).await
    }

    /// Writes the name and profile, skipping the query when nothing differs.
    pub async fn update(
        &self,
        club: entity::club_society::Model,
        name: String,
        profile: ClubProfile,
    ) -> Result<entity::club_society::Model, DbErr> {
        let mut active: entity::club_society::ActiveModel = club.clone().into();

        active.name = ActiveValue::Set(name);
        active.bio = ActiveValue::Set(profile.bio);
        active.location = ActiveValue::Set(profile.location);
        active.contact_number = ActiveValue::Set(profile.contact_number);
        active.website = ActiveValue::Set(profile.website);
        active.facebook = ActiveValue::Set(profile.facebook);
        active.twitter = ActiveValue::Set(profile.twitter);
        active.instagram = ActiveValue::Set(profile.instagram);
        active.tiktok = ActiveValue::Set(profile.tiktok);
        active.linkedin = ActiveValue::Set(profile.linkedin);
        active.youtube = ActiveValue::Set(profile.youtube);

        if !active.is_changed() {
            return Ok(club);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ClubSociety::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_member_ids(&self, club_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::ClubSocietyMember::find()
            .select_only()
            .column(entity::club_society_member::Column::UserId)
            .filter(entity::club_society_member::Column::ClubSocietyId.eq(club_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn is_member(&self, club_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ClubSocietyMember::find()
            .filter(entity::club_society_member::Column::ClubSocietyId.eq(club_id))
            .filter(entity::club_society_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts member rows. Callers pass only users that are not members yet.
    pub async fn add_members(&self, club_id: i32, user_ids: &BTreeSet<i32>) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let rows = user_ids
            .iter()
            .map(|user_id| entity::club_society_member::ActiveModel {
                club_society_id: ActiveValue::Set(club_id),
                user_id: ActiveValue::Set(*user_id),
            });
        entity::prelude::ClubSocietyMember::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove_members(
        &self,
        club_id: i32,
        user_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::ClubSocietyMember::delete_many()
            .filter(entity::club_society_member::Column::ClubSocietyId.eq(club_id))
            .filter(
                entity::club_society_member::Column::UserId
                    .is_in(user_ids.iter().copied().collect::<Vec<i32>>()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the member set, inserting and deleting only the difference.
    pub async fn set_members(&self, club_id: i32, members: &BTreeSet<i32>) -> Result<(), DbErr> {
        let current = self.get_member_ids(club_id).await?;

        let removed: BTreeSet<i32> = current.difference(members).copied().collect();
        let added: BTreeSet<i32> = members.difference(&current).copied().collect();

        self.remove_members(club_id, &removed).await?;
        self.add_members(club_id, &added).await
    }
}
