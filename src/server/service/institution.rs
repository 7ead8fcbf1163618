use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        admin::AdminRepository,
        institution::{InstitutionChanges, InstitutionRepository, NewInstitution},
        school::SchoolRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        admin::{initial_admins, reconcile_admins, AdminScope, RoleChange},
        institution::{
            role_holders, CreateInstitutionParams, Institution, UpdateInstitutionParams,
        },
        lookup::LookupTarget,
        page::{Page, Pagination},
    },
    service::resolve::{non_blank, Resolver},
};

pub struct InstitutionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an institution. The creator and any named chancellor or vice-chancellor
    /// become admins alongside the explicitly provided ones.
    pub async fn create(&self, params: CreateInstitutionParams) -> Result<Institution, AppError> {
        let name = non_blank(&params.name, "name")?;
        let category = non_blank(&params.category, "category")?;

        let txn = self.db.begin().await?;

        let repo = InstitutionRepository::new(&txn);
        ensure_name_free(&repo, &name, None).await?;

        let resolver = Resolver::new(&txn);
        let chancellor_id = resolver
            .optional_user_id(params.chancellor.as_ref())
            .await?;
        let vice_chancellor_id = resolver
            .optional_user_id(params.vice_chancellor.as_ref())
            .await?;
        let provided = resolver.user_ids(&params.admins).await?;

        let institution = repo
            .create(NewInstitution {
                category,
                name,
                chancellor_id,
                vice_chancellor_id,
                created_by_id: Some(params.created_by),
            })
            .await?;

        let admins = initial_admins(&role_holders(&institution), &provided);
        AdminRepository::new(&txn)
            .add(AdminScope::Institution(institution.id), &admins)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created institution {} ({})",
            institution.name,
            institution.id
        );

        load(self.db, institution).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Institution>, AppError> {
        match InstitutionRepository::new(self.db).find_by_id(id).await? {
            Some(institution) => Ok(Some(load(self.db, institution).await?)),
            None => Ok(None),
        }
    }

    /// Gets a page of institutions, optionally narrowed to a category.
    pub async fn get_paginated(
        &self,
        category: Option<&str>,
        pagination: Pagination,
    ) -> Result<Page<Institution>, AppError> {
        let (institutions, total) = InstitutionRepository::new(self.db)
            .get_paginated(category, pagination)
            .await?;

        let mut items = Vec::with_capacity(institutions.len());
        for institution in institutions {
            items.push(load(self.db, institution).await?);
        }

        Ok(Page::new(items, total, pagination.page, pagination.per_page))
    }

    /// Finds the id of the institution a lookup request targets.
    pub async fn find_id(&self, target: &LookupTarget) -> Result<Option<i32>, AppError> {
        let repo = InstitutionRepository::new(self.db);

        let institution = match target {
            LookupTarget::Id(id) => repo.find_by_id(*id).await?,
            LookupTarget::Name(name) => repo.find_by_name(name).await?,
        };

        Ok(institution.map(|institution| institution.id))
    }

    /// Applies a partial update, reconciling admins with any role changes.
    ///
    /// # Returns
    /// - `Ok(Some(Institution))` - The updated institution
    /// - `Ok(None)` - No institution with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInstitutionParams,
    ) -> Result<Option<Institution>, AppError> {
        let txn = self.db.begin().await?;

        let repo = InstitutionRepository::new(&txn);
        let Some(institution) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| non_blank(name, "name"))
            .transpose()?;
        if let Some(name) = &name {
            ensure_name_free(&repo, name, Some(id)).await?;
        }
        let category = params
            .category
            .as_deref()
            .map(|category| non_blank(category, "category"))
            .transpose()?;

        let resolver = Resolver::new(&txn);
        let chancellor_id = resolver.role_change(params.chancellor.as_ref()).await?;
        let vice_chancellor_id = resolver.role_change(params.vice_chancellor.as_ref()).await?;
        let add = resolver.user_ids(&params.admins).await?;
        let remove = resolver.user_ids(&params.remove_admins).await?;

        let roles = [
            RoleChange::new(institution.chancellor_id, chancellor_id),
            RoleChange::new(institution.vice_chancellor_id, vice_chancellor_id),
            RoleChange::unchanged(institution.created_by_id),
        ];

        let scope = AdminScope::Institution(id);
        let admin_repo = AdminRepository::new(&txn);
        let current = admin_repo.get_admin_ids(scope).await?;
        let next = reconcile_admins(&current, &roles, &add, &remove);
        admin_repo.replace(scope, &next).await?;

        let institution = repo
            .update(
                institution,
                InstitutionChanges {
                    category,
                    name,
                    chancellor_id,
                    vice_chancellor_id,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(Some(load(self.db, institution).await?))
    }

    /// Deletes an institution and, through cascades, its schools and departments.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No institution with this id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = InstitutionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted institution {}", id);

        Ok(true)
    }
}

async fn ensure_name_free<C: ConnectionTrait>(
    repo: &InstitutionRepository<'_, C>,
    name: &str,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    match repo.find_by_name(name).await? {
        Some(existing) if Some(existing.id) != excluding => Err(AppError::BadRequest(
            "An institution with this name already exists.".to_string(),
        )),
        _ => Ok(()),
    }
}

async fn load<C: ConnectionTrait>(
    db: &C,
    institution: entity::institution::Model,
) -> Result<Institution, AppError> {
    let admin_ids = AdminRepository::new(db)
        .get_admin_ids(AdminScope::Institution(institution.id))
        .await?;
    let users = UserRepository::new(db)
        .usernames(
            role_holders(&institution)
                .into_iter()
                .flatten()
                .chain(admin_ids.iter().copied()),
        )
        .await?;
    let schools = SchoolRepository::new(db)
        .refs_by_institution(institution.id)
        .await?;

    Ok(Institution::from_parts(institution, &users, admin_ids, schools))
}
