use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            admin::AdminRepository,
            department::DepartmentRepository,
            institution::InstitutionRepository,
            school::{LeadershipChanges, NewSchool, SchoolRepository},
            user::UserRepository,
        },
        error::AppError,
        model::{
            admin::{initial_admins, reconcile_admins, AdminScope, RoleChange},
            lookup::{single_match, LookupTarget},
            reference::NamedRef,
            school::{role_holders, CreateSchoolParams, School, UpdateSchoolParams},
        },
        service::resolve::{non_blank, Resolver},
    },
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a school in an institution the caller has already been authorized for.
    pub async fn create(&self, params: CreateSchoolParams) -> Result<School, AppError> {
        let name = non_blank(&params.name, "name")?;

        let txn = self.db.begin().await?;

        let repo = SchoolRepository::new(&txn);
        ensure_name_free(&repo, &name, params.institution_id, None).await?;

        let resolver = Resolver::new(&txn);
        let head_id = resolver.optional_user_id(params.head.as_ref()).await?;
        let secretary_id = resolver.optional_user_id(params.secretary.as_ref()).await?;
        let provided = resolver.user_ids(&params.admins).await?;

        let school = repo
            .create(NewSchool {
                name,
                institution_id: params.institution_id,
                head_id,
                secretary_id,
                created_by_id: Some(params.created_by),
            })
            .await?;

        let admins = initial_admins(&role_holders(&school), &provided);
        AdminRepository::new(&txn)
            .add(AdminScope::School(school.id), &admins)
            .await?;

        txn.commit().await?;

        tracing::info!("Created school {} ({})", school.name, school.id);

        load(self.db, school).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<School>, AppError> {
        match SchoolRepository::new(self.db).find_by_id(id).await? {
            Some(school) => Ok(Some(load(self.db, school).await?)),
            None => Ok(None),
        }
    }

    /// Lists schools, optionally within an institution. An unknown institution yields
    /// an empty list.
    pub async fn get_all(&self, institution: Option<&Lookup>) -> Result<Vec<School>, AppError> {
        let institution_id = match institution {
            Some(lookup) => match Resolver::new(self.db).institution(lookup).await? {
                Some(institution) => Some(institution.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let schools = SchoolRepository::new(self.db)
            .get_all(institution_id)
            .await?;

        let mut items = Vec::with_capacity(schools.len());
        for school in schools {
            items.push(load(self.db, school).await?);
        }

        Ok(items)
    }

    /// Finds the id of the school a lookup request targets.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = SchoolRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|school| school.id)),
            LookupTarget::Name(name) => {
                let institution_id = match institution {
                    Some(lookup) => match Resolver::new(self.db).institution(lookup).await? {
                        Some(institution) => Some(institution.id),
                        None => return Ok(None),
                    },
                    None => None,
                };

                let school = single_match(
                    repo.find_by_name(name, institution_id).await?,
                    "school",
                    name,
                )?;

                Ok(school.map(|school| school.id))
            }
        }
    }

    /// Applies a partial update, reconciling admins with any head/secretary change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateSchoolParams,
    ) -> Result<Option<School>, AppError> {
        let txn = self.db.begin().await?;

        let repo = SchoolRepository::new(&txn);
        let Some(school) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| non_blank(name, "name"))
            .transpose()?;
        if let Some(name) = &name {
            ensure_name_free(&repo, name, school.institution_id, Some(id)).await?;
        }

        let resolver = Resolver::new(&txn);
        let head_id = resolver.role_change(params.head.as_ref()).await?;
        let secretary_id = resolver.role_change(params.secretary.as_ref()).await?;
        let add = resolver.user_ids(&params.admins).await?;
        let remove = resolver.user_ids(&params.remove_admins).await?;

        let roles = [
            RoleChange::new(school.head_id, head_id),
            RoleChange::new(school.secretary_id, secretary_id),
            RoleChange::unchanged(school.created_by_id),
        ];

        let scope = AdminScope::School(id);
        let admin_repo = AdminRepository::new(&txn);
        let current = admin_repo.get_admin_ids(scope).await?;
        admin_repo
            .replace(scope, &reconcile_admins(&current, &roles, &add, &remove))
            .await?;

        let school = repo
            .update(
                school,
                LeadershipChanges {
                    name,
                    head_id,
                    secretary_id,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(Some(load(self.db, school).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SchoolRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted school {}", id);

        Ok(true)
    }
}

async fn ensure_name_free<C: ConnectionTrait>(
    repo: &SchoolRepository<'_, C>,
    name: &str,
    institution_id: i32,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let taken = repo
        .find_by_name(name, Some(institution_id))
        .await?
        .into_iter()
        .any(|school| Some(school.id) != excluding);

    if taken {
        return Err(AppError::BadRequest(
            "A school with this name already exists in this institution.".to_string(),
        ));
    }

    Ok(())
}

async fn load<C: ConnectionTrait>(db: &C, school: entity::school::Model) -> Result<School, AppError> {
    let institution = InstitutionRepository::new(db)
        .refs(vec![school.institution_id])
        .await?
        .pop()
        .unwrap_or_else(|| NamedRef::new(school.institution_id, String::new()));
    let admin_ids = AdminRepository::new(db)
        .get_admin_ids(AdminScope::School(school.id))
        .await?;
    let users = UserRepository::new(db)
        .usernames(
            role_holders(&school)
                .into_iter()
                .flatten()
                .chain(admin_ids.iter().copied()),
        )
        .await?;
    let departments = DepartmentRepository::new(db)
        .refs_by_school(school.id)
        .await?;

    Ok(School::from_parts(
        school,
        institution,
        &users,
        admin_ids,
        departments,
    ))
}
