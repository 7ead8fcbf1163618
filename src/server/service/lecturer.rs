use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            department::DepartmentRepository, institution::InstitutionRepository,
            lecturer::LecturerRepository, school::SchoolRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            lecturer::{CreateLecturerParams, Lecturer, LecturerFilter, UpdateLecturerParams},
            lookup::LookupTarget,
            reference::{NamedRef, UserRef},
        },
        service::resolve::{required, Resolver},
    },
};

/// Owner and institution of a profile, used for `SelfOrInstitutionAdmin` checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOwner {
    pub user_id: i32,
    pub institution_id: Option<i32>,
}

pub struct LecturerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LecturerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lecturer profile, linking it to departments.
    ///
    /// # Returns
    /// - `Ok(Lecturer)` - The new profile
    /// - `Err(AppError::BadRequest)` - The user already has a profile, or a department
    ///   does not exist or lies outside the profile's institution
    pub async fn create(&self, params: CreateLecturerParams) -> Result<Lecturer, AppError> {
        let txn = self.db.begin().await?;

        let repo = LecturerRepository::new(&txn);
        if repo.find_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "This user already has a lecturer profile.".to_string(),
            ));
        }

        let department_ids =
            resolve_departments(&txn, &params.departments, params.institution_id).await?;

        let lecturer = repo.create(params.user_id, params.institution_id).await?;
        repo.set_departments(lecturer.id, &department_ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Created lecturer profile {} for user {}",
            lecturer.id,
            lecturer.user_id
        );

        load(self.db, lecturer).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Lecturer>, AppError> {
        match LecturerRepository::new(self.db).find_by_id(id).await? {
            Some(lecturer) => Ok(Some(load(self.db, lecturer).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_owner(&self, id: i32) -> Result<Option<ProfileOwner>, AppError> {
        Ok(LecturerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(|lecturer| ProfileOwner {
                user_id: lecturer.user_id,
                institution_id: lecturer.institution_id,
            }))
    }

    /// Lists lecturers narrowed by institution and/or department. Unknown filters yield
    /// an empty list.
    pub async fn get_all(&self, filter: LecturerFilter) -> Result<Vec<Lecturer>, AppError> {
        let resolver = Resolver::new(self.db);
        let repo = LecturerRepository::new(self.db);

        let institution_id = match &filter.institution {
            Some(lookup) => match resolver.institution(lookup).await? {
                Some(institution) => Some(institution.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let ids = match &filter.department {
            Some(lookup) => match resolver.department(lookup, None).await? {
                Some(department) => Some(repo.get_ids_by_department(department.id).await?),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let lecturers = repo.get_all(institution_id, ids).await?;

        let mut items = Vec::with_capacity(lecturers.len());
        for lecturer in lecturers {
            items.push(load(self.db, lecturer).await?);
        }

        Ok(items)
    }

    /// Finds the lecturer a lookup targets, by profile id or by username.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = LecturerRepository::new(self.db);

        let lecturer = match target {
            LookupTarget::Id(id) => repo.find_by_id(*id).await?,
            LookupTarget::Name(username) => {
                let Some(user) = UserRepository::new(self.db)
                    .find_by_username(username)
                    .await?
                else {
                    return Ok(None);
                };
                repo.find_by_user_id(user.id).await?
            }
        };

        let Some(lecturer) = lecturer else {
            return Ok(None);
        };

        if let Some(lookup) = institution {
            let institution = Resolver::new(self.db).institution(lookup).await?;
            if institution.map(|i| i.id) != lecturer.institution_id {
                return Ok(None);
            }
        }

        Ok(Some(lecturer.id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateLecturerParams,
    ) -> Result<Option<Lecturer>, AppError> {
        let txn = self.db.begin().await?;

        let repo = LecturerRepository::new(&txn);
        let Some(mut lecturer) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(institution) = &params.institution {
            let institution_id = match institution {
                Some(lookup) => Some(
                    required(
                        Resolver::new(&txn).institution(lookup).await?,
                        "Institution",
                        lookup,
                    )?
                    .id,
                ),
                None => None,
            };
            if institution_id != lecturer.institution_id {
                lecturer = repo.set_institution(lecturer, institution_id).await?;
            }
        }

        if let Some(departments) = &params.departments {
            let department_ids =
                resolve_departments(&txn, departments, lecturer.institution_id).await?;
            repo.set_departments(lecturer.id, &department_ids).await?;
        }

        txn.commit().await?;

        Ok(Some(load(self.db, lecturer).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = LecturerRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted lecturer profile {}", id);

        Ok(true)
    }
}

/// Resolves department references, requiring each to sit within `institution_id` when set.
async fn resolve_departments<C: ConnectionTrait>(
    db: &C,
    lookups: &[Lookup],
    institution_id: Option<i32>,
) -> Result<BTreeSet<i32>, AppError> {
    let resolver = Resolver::new(db);
    let school_repo = SchoolRepository::new(db);

    let mut ids = BTreeSet::new();
    for lookup in lookups {
        let department = required(resolver.department(lookup, None).await?, "Department", lookup)?;

        if let Some(institution_id) = institution_id {
            let school = school_repo.find_by_id(department.school_id).await?;
            if school.map(|s| s.institution_id) != Some(institution_id) {
                return Err(AppError::BadRequest(format!(
                    "Department '{}' is not part of the lecturer's institution.",
                    department.name
                )));
            }
        }

        ids.insert(department.id);
    }

    Ok(ids)
}

async fn load<C: ConnectionTrait>(
    db: &C,
    lecturer: entity::lecturer::Model,
) -> Result<Lecturer, AppError> {
    let users = UserRepository::new(db).usernames([lecturer.user_id]).await?;
    let user = users
        .get(Some(lecturer.user_id))
        .unwrap_or_else(|| UserRef {
            id: lecturer.user_id,
            username: String::new(),
        });

    let institution = match lecturer.institution_id {
        Some(id) => InstitutionRepository::new(db).refs(vec![id]).await?.pop(),
        None => None,
    };

    let repo = LecturerRepository::new(db);
    let department_ids: Vec<i32> = repo
        .get_department_ids(lecturer.id)
        .await?
        .into_iter()
        .collect();
    let mut departments: Vec<NamedRef> = DepartmentRepository::new(db).refs(department_ids).await?;
    departments.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Lecturer {
        id: lecturer.id,
        user,
        institution,
        departments,
    })
}
