use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            course::CourseRepository, department::DepartmentRepository, unit::UnitRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            course::{Course, CreateCourseParams},
            lookup::{single_match, LookupTarget},
            reference::NamedRef,
        },
        service::resolve::{non_blank, required, Resolver},
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the department named in a create request, optionally within a school.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the department
    /// - `Err(AppError::BadRequest)` - The school or department does not exist
    pub async fn resolve_department(
        &self,
        department: &Lookup,
        school: Option<&Lookup>,
    ) -> Result<i32, AppError> {
        let resolver = Resolver::new(self.db);

        let school_ids = match school {
            Some(lookup) => Some(vec![
                required(resolver.school(lookup, None).await?, "School", lookup)?.id,
            ]),
            None => None,
        };

        Ok(required(
            resolver.department(department, school_ids).await?,
            "Department",
            department,
        )?
        .id)
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let name = non_blank(&params.name, "name")?;

        let course = CourseRepository::new(self.db)
            .create(name, params.department_id, Some(params.created_by))
            .await?;

        tracing::info!("Created course {} ({})", course.name, course.id);

        load(self.db, course).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        match CourseRepository::new(self.db).find_by_id(id).await? {
            Some(course) => Ok(Some(load(self.db, course).await?)),
            None => Ok(None),
        }
    }

    /// Gets the department owning a course, which governs who may change it.
    pub async fn get_department_id(&self, id: i32) -> Result<Option<i32>, AppError> {
        Ok(CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(|course| course.department_id))
    }

    /// Lists courses, optionally within a department. An unknown department yields an
    /// empty list.
    pub async fn get_all(&self, department: Option<&Lookup>) -> Result<Vec<Course>, AppError> {
        let Some(department_ids) = Resolver::new(self.db)
            .department_scope(department, None, None)
            .await?
            .into_filter()
        else {
            return Ok(Vec::new());
        };

        let courses = CourseRepository::new(self.db)
            .get_all(department_ids)
            .await?;

        let mut items = Vec::with_capacity(courses.len());
        for course in courses {
            items.push(load(self.db, course).await?);
        }

        Ok(items)
    }

    /// Finds the id of the course a lookup request targets. Course names are not unique,
    /// so an ambiguous name is a 400.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        department: Option<&Lookup>,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = CourseRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|course| course.id)),
            LookupTarget::Name(name) => {
                let Some(department_ids) = Resolver::new(self.db)
                    .department_scope(department, school, institution)
                    .await?
                    .into_filter()
                else {
                    return Ok(None);
                };

                let course =
                    single_match(repo.find_by_name(name, department_ids).await?, "course", name)?;

                Ok(course.map(|course| course.id))
            }
        }
    }

    pub async fn rename(&self, id: i32, name: Option<String>) -> Result<Option<Course>, AppError> {
        let repo = CourseRepository::new(self.db);

        let Some(course) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let course = match name {
            Some(name) => repo.rename(course, non_blank(&name, "name")?).await?,
            None => course,
        };

        Ok(Some(load(self.db, course).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CourseRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted course {}", id);

        Ok(true)
    }
}

async fn load<C: ConnectionTrait>(db: &C, course: entity::course::Model) -> Result<Course, AppError> {
    let department = DepartmentRepository::new(db)
        .refs(vec![course.department_id])
        .await?
        .pop()
        .unwrap_or_else(|| NamedRef::new(course.department_id, String::new()));
    let users = UserRepository::new(db).usernames(course.created_by_id).await?;
    let units = UnitRepository::new(db).refs_by_course(course.id).await?;

    Ok(Course {
        id: course.id,
        name: course.name,
        department,
        created_by: users.get(course.created_by_id),
        units,
    })
}
