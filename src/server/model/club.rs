//! Domain & parameter models for club/society operations.

use crate::{
    model::{
        api::Lookup,
        club::{ClubDto, ClubProfileDto, CreateClubDto, UpdateClubDto},
    },
    server::model::reference::{usernames, NamedRef, UserRef, Usernames},
};

#[derive(Debug, Clone)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub institution: Option<NamedRef>,
    pub profile: ClubProfile,
    pub created_by: Option<UserRef>,
    pub admins: Vec<UserRef>,
    pub members: Vec<UserRef>,
}

/// Descriptive fields of a club.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubProfile {
    pub bio: String,
    pub location: String,
    pub contact_number: String,
    pub website: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub tiktok: String,
    pub linkedin: String,
    pub youtube: String,
}

impl ClubProfile {
    pub fn from_entity(entity: &entity::club_society::Model) -> Self {
        Self {
            bio: entity.bio.clone(),
            location: entity.location.clone(),
            contact_number: entity.contact_number.clone(),
            website: entity.website.clone(),
            facebook: entity.facebook.clone(),
            twitter: entity.twitter.clone(),
            instagram: entity.instagram.clone(),
            tiktok: entity.tiktok.clone(),
            linkedin: entity.linkedin.clone(),
            youtube: entity.youtube.clone(),
        }
    }

    pub fn into_dto(self) -> ClubProfileDto {
        ClubProfileDto {
            bio: self.bio,
            location: self.location,
            contact_number: self.contact_number,
            website: self.website,
            facebook: self.facebook,
            twitter: self.twitter,
            instagram: self.instagram,
            tiktok: self.tiktok,
            linkedin: self.linkedin,
            youtube: self.youtube,
        }
    }
}

impl From<ClubProfileDto> for ClubProfile {
    fn from(dto: ClubProfileDto) -> Self {
        Self {
            bio: dto.bio,
            location: dto.location,
            contact_number: dto.contact_number,
            website: dto.website,
            facebook: dto.facebook,
            twitter: dto.twitter,
            instagram: dto.instagram,
            tiktok: dto.tiktok,
            linkedin: dto.linkedin,
            youtube: dto.youtube,
        }
    }
}

impl Club {
    pub fn from_parts(
        entity: entity::club_society::Model,
        institution: Option<NamedRef>,
        users: &Usernames,
        admin_ids: impl IntoIterator<Item = i32>,
        member_ids: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            id: entity.id,
            profile: ClubProfile::from_entity(&entity),
            name: entity.name,
            institution,
            created_by: users.get(entity.created_by_id),
            admins: users.all(admin_ids),
            members: users.all(member_ids),
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            institution: self.institution.map(NamedRef::into_dto),
            profile: self.profile.into_dto(),
            created_by: self.created_by.map(|user| user.username),
            admins: usernames(self.admins),
            members: usernames(self.members),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub name: String,
    pub institution: Option<Lookup>,
    pub profile: ClubProfile,
    pub admins: Vec<Lookup>,
    pub members: Vec<Lookup>,
    pub created_by: i32,
}

impl CreateClubParams {
    pub fn from_dto(dto: CreateClubDto, created_by: i32) -> Self {
        Self {
            name: dto.name,
            institution: dto.institution,
            profile: dto.profile.into(),
            admins: dto.admins,
            members: dto.members,
            created_by,
        }
    }
}

/// Partial profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ClubProfilePatch {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

impl ClubProfilePatch {
    pub fn apply(self, profile: &mut ClubProfile) {
        let fields = [
            (self.bio, &mut profile.bio),
            (self.location, &mut profile.location),
            (self.contact_number, &mut profile.contact_number),
            (self.website, &mut profile.website),
            (self.facebook, &mut profile.facebook),
            (self.twitter, &mut profile.twitter),
            (self.instagram, &mut profile.instagram),
            (self.tiktok, &mut profile.tiktok),
            (self.linkedin, &mut profile.linkedin),
            (self.youtube, &mut profile.youtube),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClubParams {
    pub name: Option<String>,
    pub profile: ClubProfilePatch,
    pub admins: Vec<Lookup>,
    pub remove_admins: Vec<Lookup>,
    pub members: Vec<Lookup>,
    pub remove_members: Vec<Lookup>,
}

impl From<UpdateClubDto> for UpdateClubParams {
    fn from(dto: UpdateClubDto) -> Self {
        Self {
            name: dto.name,
            profile: ClubProfilePatch {
                bio: dto.bio,
                location: dto.location,
                contact_number: dto.contact_number,
                website: dto.website,
                facebook: dto.facebook,
                twitter: dto.twitter,
                instagram: dto.instagram,
                tiktok: dto.tiktok,
                linkedin: dto.linkedin,
                youtube: dto.youtube,
            },
            admins: dto.admins,
            remove_admins: dto.remove_admins,
            members: dto.members,
            remove_members: dto.remove_members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_patch_only_touches_given_fields() {
        let mut profile = ClubProfile {
            bio: "Chess".to_string(),
            website: "https://chess.example".to_string(),
            ..Default::default()
        };

        ClubProfilePatch {
            bio: Some("Chess and go".to_string()),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.bio, "Chess and go");
        assert_eq!(profile.website, "https://chess.example");
    }
}
