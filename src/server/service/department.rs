use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            admin::AdminRepository,
            course::CourseRepository,
            department::{DepartmentRepository, NewDepartment},
            institution::InstitutionRepository,
            school::{LeadershipChanges, SchoolRepository},
            user::UserRepository,
        },
        error::AppError,
        model::{
            admin::{initial_admins, reconcile_admins, AdminScope, RoleChange},
            department::{
                role_holders, CreateDepartmentParams, Department, DepartmentRelations,
                UpdateDepartmentParams,
            },
            lookup::{single_match, LookupTarget},
            reference::NamedRef,
        },
        service::resolve::{non_blank, Resolver},
    },
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a department in a school the caller has already been authorized for.
    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, AppError> {
        let name = non_blank(&params.name, "name")?;

        let txn = self.db.begin().await?;

        let repo = DepartmentRepository::new(&txn);
        ensure_name_free(&repo, &name, params.school_id, None).await?;

        let resolver = Resolver::new(&txn);
        let head_id = resolver.optional_user_id(params.head.as_ref()).await?;
        let secretary_id = resolver.optional_user_id(params.secretary.as_ref()).await?;
        let provided = resolver.user_ids(&params.admins).await?;

        let department = repo
            .create(NewDepartment {
                name,
                school_id: params.school_id,
                head_id,
                secretary_id,
                created_by_id: Some(params.created_by),
            })
            .await?;

        let admins = initial_admins(&role_holders(&department), &provided);
        AdminRepository::new(&txn)
            .add(AdminScope::Department(department.id), &admins)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created department {} ({})",
            department.name,
            department.id
        );

        load(self.db, department).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, AppError> {
        match DepartmentRepository::new(self.db).find_by_id(id).await? {
            Some(department) => Ok(Some(load(self.db, department).await?)),
            None => Ok(None),
        }
    }

    /// Lists departments narrowed by school and/or institution. Unknown filters yield
    /// an empty list.
    pub async fn get_all(
        &self,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Vec<Department>, AppError> {
        let Some(school_ids) = Resolver::new(self.db)
            .school_scope(school, institution)
            .await?
            .into_filter()
        else {
            return Ok(Vec::new());
        };

        let departments = DepartmentRepository::new(self.db)
            .get_all(school_ids)
            .await?;

        let mut items = Vec::with_capacity(departments.len());
        for department in departments {
            items.push(load(self.db, department).await?);
        }

        Ok(items)
    }

    /// Finds the id of the department a lookup request targets.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = DepartmentRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|d| d.id)),
            LookupTarget::Name(name) => {
                let Some(school_ids) = Resolver::new(self.db)
                    .school_scope(school, institution)
                    .await?
                    .into_filter()
                else {
                    return Ok(None);
                };

                let department = single_match(
                    repo.find_by_name(name, school_ids).await?,
                    "department",
                    name,
                )?;

                Ok(department.map(|d| d.id))
            }
        }
    }

    /// Applies a partial update, reconciling admins with any head/secretary change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDepartmentParams,
    ) -> Result<Option<Department>, AppError> {
        let txn = self.db.begin().await?;

        let repo = DepartmentRepository::new(&txn);
        let Some(department) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| non_blank(name, "name"))
            .transpose()?;
        if let Some(name) = &name {
            ensure_name_free(&repo, name, department.school_id, Some(id)).await?;
        }

        let resolver = Resolver::new(&txn);
        let head_id = resolver.role_change(params.head.as_ref()).await?;
        let secretary_id = resolver.role_change(params.secretary.as_ref()).await?;
        let add = resolver.user_ids(&params.admins).await?;
        let remove = resolver.user_ids(&params.remove_admins).await?;

        let roles = [
            RoleChange::new(department.head_id, head_id),
            RoleChange::new(department.secretary_id, secretary_id),
            RoleChange::unchanged(department.created_by_id),
        ];

        let scope = AdminScope::Department(id);
        let admin_repo = AdminRepository::new(&txn);
        let current = admin_repo.get_admin_ids(scope).await?;
        admin_repo
            .replace(scope, &reconcile_admins(&current, &roles, &add, &remove))
            .await?;

        let department = repo
            .update(
                department,
                LeadershipChanges {
                    name,
                    head_id,
                    secretary_id,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(Some(load(self.db, department).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = DepartmentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted department {}", id);

        Ok(true)
    }
}

async fn ensure_name_free<C: ConnectionTrait>(
    repo: &DepartmentRepository<'_, C>,
    name: &str,
    school_id: i32,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let taken = repo
        .find_by_name(name, Some(vec![school_id]))
        .await?
        .into_iter()
        .any(|department| Some(department.id) != excluding);

    if taken {
        return Err(AppError::BadRequest(
            "A department with this name already exists in this school.".to_string(),
        ));
    }

    Ok(())
}

async fn load<C: ConnectionTrait>(
    db: &C,
    department: entity::department::Model,
) -> Result<Department, AppError> {
    let school = SchoolRepository::new(db)
        .find_by_id(department.school_id)
        .await?
        .ok_or_else(|| AppError::not_found("School"))?;
    let institution = InstitutionRepository::new(db)
        .refs(vec![school.institution_id])
        .await?
        .pop()
        .unwrap_or_else(|| NamedRef::new(school.institution_id, String::new()));

    let admin_ids: Vec<i32> = AdminRepository::new(db)
        .get_admin_ids(AdminScope::Department(department.id))
        .await?
        .into_iter()
        .collect();
    let department_repo = DepartmentRepository::new(db);
    let lecturer_user_ids = department_repo
        .get_lecturer_user_ids(department.id)
        .await?;
    let courses = CourseRepository::new(db)
        .refs_by_department(department.id)
        .await?;

    let users = UserRepository::new(db)
        .usernames(
            role_holders(&department)
                .into_iter()
                .flatten()
                .chain(admin_ids.iter().copied())
                .chain(lecturer_user_ids.iter().copied()),
        )
        .await?;

    Ok(Department::from_parts(
        department,
        DepartmentRelations {
            school: NamedRef::new(school.id, school.name),
            institution,
            admin_ids,
            courses,
            lecturer_user_ids,
        },
        &users,
    ))
}
