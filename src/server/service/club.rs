use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            admin::AdminRepository,
            club::{ClubRepository, NewClub},
            institution::InstitutionRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            admin::{initial_admins, reconcile_admins, reconcile_members, AdminScope, RoleChange},
            club::{Club, ClubProfile, CreateClubParams, UpdateClubParams},
            lookup::{single_match, LookupTarget},
            reference::NamedRef,
        },
        service::resolve::{non_blank, required, Resolver},
    },
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a club. The creator becomes a member and an admin, and every admin is
    /// also a member.
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, AppError> {
        let name = non_blank(&params.name, "name")?;

        let txn = self.db.begin().await?;

        let resolver = Resolver::new(&txn);
        let institution_id = match &params.institution {
            Some(lookup) => Some(
                required(resolver.institution(lookup).await?, "Institution", lookup)?.id,
            ),
            None => None,
        };

        let repo = ClubRepository::new(&txn);
        ensure_name_free(&repo, &name, institution_id, None).await?;

        let provided_admins = resolver.user_ids(&params.admins).await?;
        let provided_members = resolver.user_ids(&params.members).await?;

        let club = repo
            .create(NewClub {
                name,
                institution_id,
                profile: params.profile,
                created_by_id: Some(params.created_by),
            })
            .await?;

        let admins = initial_admins(&[club.created_by_id], &provided_admins);
        let members = reconcile_members(
            &BTreeSet::new(),
            &provided_members,
            &BTreeSet::new(),
            &admins,
        );

        AdminRepository::new(&txn)
            .add(AdminScope::ClubSociety(club.id), &admins)
            .await?;
        repo.add_members(club.id, &members).await?;

        txn.commit().await?;

        tracing::info!("Created club {} ({})", club.name, club.id);

        load(self.db, club).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Club>, AppError> {
        match ClubRepository::new(self.db).find_by_id(id).await? {
            Some(club) => Ok(Some(load(self.db, club).await?)),
            None => Ok(None),
        }
    }

    /// Lists clubs, optionally within an institution. An unknown institution yields an
    /// empty list.
    pub async fn get_all(&self, institution: Option<&Lookup>) -> Result<Vec<Club>, AppError> {
        let Some(institution_ids) = Resolver::new(self.db)
            .institution_scope(institution)
            .await?
            .into_filter()
        else {
            return Ok(Vec::new());
        };

        let institution_id = institution_ids.and_then(|ids| ids.first().copied());
        let clubs = ClubRepository::new(self.db).get_all(institution_id).await?;

        let mut items = Vec::with_capacity(clubs.len());
        for club in clubs {
            items.push(load(self.db, club).await?);
        }

        Ok(items)
    }

    /// Finds the id of the club a lookup request targets.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = ClubRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|club| club.id)),
            LookupTarget::Name(name) => {
                let Some(institution_ids) = Resolver::new(self.db)
                    .institution_scope(institution)
                    .await?
                    .into_filter()
                else {
                    return Ok(None);
                };
                let institution_id = institution_ids.and_then(|ids| ids.first().copied());

                let club = single_match(
                    repo.find_by_name(name, institution_id).await?,
                    "club",
                    name,
                )?;

                Ok(club.map(|club| club.id))
            }
        }
    }

    /// Applies a partial update. The creator can never be removed from the admins, and
    /// admins can never be removed from the members.
    pub async fn update(&self, id: i32, params: UpdateClubParams) -> Result<Option<Club>, AppError> {
        let txn = self.db.begin().await?;

        let repo = ClubRepository::new(&txn);
        let Some(club) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = match &params.name {
            Some(name) => {
                let name = non_blank(name, "name")?;
                ensure_name_free(&repo, &name, club.institution_id, Some(club.id)).await?;
                name
            }
            None => club.name.clone(),
        };

        let resolver = Resolver::new(&txn);
        let add_admins = resolver.user_ids(&params.admins).await?;
        let remove_admins = resolver.user_ids(&params.remove_admins).await?;
        let add_members = resolver.user_ids(&params.members).await?;
        let remove_members = resolver.user_ids(&params.remove_members).await?;

        let scope = AdminScope::ClubSociety(club.id);
        let admin_repo = AdminRepository::new(&txn);
        let current_admins = admin_repo.get_admin_ids(scope).await?;
        let admins = reconcile_admins(
            &current_admins,
            &[RoleChange::unchanged(club.created_by_id)],
            &add_admins,
            &remove_admins,
        );
        admin_repo.replace(scope, &admins).await?;

        let current_members = repo.get_member_ids(club.id).await?;
        let members =
            reconcile_members(&current_members, &add_members, &remove_members, &admins);
        repo.set_members(club.id, &members).await?;

        let mut profile = ClubProfile::from_entity(&club);
        params.profile.apply(&mut profile);
        let club = repo.update(club, name, profile).await?;

        txn.commit().await?;

        Ok(Some(load(self.db, club).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ClubRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted club {}", id);

        Ok(true)
    }

    /// Adds the user to the club's members.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - The club after joining
    /// - `Ok(None)` - No club with this id
    /// - `Err(AppError::BadRequest)` - The user is already a member
    pub async fn join(&self, id: i32, user_id: i32) -> Result<Option<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        let Some(club) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if repo.is_member(club.id, user_id).await? {
            return Err(AppError::BadRequest(
                "You are already a member of this club.".to_string(),
            ));
        }

        repo.add_members(club.id, &BTreeSet::from([user_id])).await?;

        tracing::info!("User {} joined club {}", user_id, club.id);

        Ok(Some(load(self.db, club).await?))
    }

    /// Removes the user from the club's members and admins.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - The club after leaving
    /// - `Ok(None)` - No club with this id
    /// - `Err(AppError::BadRequest)` - The user created the club or is not a member
    pub async fn leave(&self, id: i32, user_id: i32) -> Result<Option<Club>, AppError> {
        let txn = self.db.begin().await?;

        let repo = ClubRepository::new(&txn);
        let Some(club) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if club.created_by_id == Some(user_id) {
            return Err(AppError::BadRequest(
                "The creator of a club cannot leave it.".to_string(),
            ));
        }
        if !repo.is_member(club.id, user_id).await? {
            return Err(AppError::BadRequest(
                "You are not a member of this club.".to_string(),
            ));
        }

        let user = BTreeSet::from([user_id]);
        AdminRepository::new(&txn)
            .remove(AdminScope::ClubSociety(club.id), &user)
            .await?;
        repo.remove_members(club.id, &user).await?;

        txn.commit().await?;

        tracing::info!("User {} left club {}", user_id, club.id);

        Ok(Some(load(self.db, club).await?))
    }
}

async fn ensure_name_free<C: ConnectionTrait>(
    repo: &ClubRepository<'_, C>,
    name: &str,
    institution_id: Option<i32>,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let taken = repo
        .find_by_name(name, institution_id)
        .await?
        .into_iter()
        .any(|club| club.institution_id == institution_id && Some(club.id) != excluding);

    if taken {
        return Err(AppError::BadRequest(
            "A club with this name already exists in this institution.".to_string(),
        ));
    }

    Ok(())
}

async fn load<C: ConnectionTrait>(
    db: &C,
    club: entity::club_society::Model,
) -> Result<Club, AppError> {
    let admin_ids = AdminRepository::new(db)
        .get_admin_ids(AdminScope::ClubSociety(club.id))
        .await?;
    let member_ids = ClubRepository::new(db).get_member_ids(club.id).await?;
    let users = UserRepository::new(db)
        .usernames(
            club.created_by_id
                .into_iter()
                .chain(admin_ids.iter().copied())
                .chain(member_ids.iter().copied()),
        )
        .await?;
    let institution: Option<NamedRef> = match club.institution_id {
        Some(id) => InstitutionRepository::new(db).refs(vec![id]).await?.pop(),
        None => None,
    };

    Ok(Club::from_parts(club, institution, &users, admin_ids, member_ids))
}
