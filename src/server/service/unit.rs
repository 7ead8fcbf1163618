use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::api::Lookup,
    server::{
        data::{course::CourseRepository, unit::UnitRepository, user::UserRepository},
        error::AppError,
        model::{
            course::{CreateUnitParams, Unit},
            lookup::{single_match, LookupTarget},
            reference::NamedRef,
        },
        service::resolve::{non_blank, required, Resolver},
    },
};

pub struct UnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the course named in a create request, optionally within a department.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - The course
    /// - `Err(AppError::BadRequest)` - The department or course does not exist
    pub async fn resolve_course(
        &self,
        course: &Lookup,
        department: Option<&Lookup>,
    ) -> Result<entity::course::Model, AppError> {
        let resolver = Resolver::new(self.db);

        let department_ids = match department {
            Some(lookup) => Some(vec![
                required(resolver.department(lookup, None).await?, "Department", lookup)?.id,
            ]),
            None => None,
        };

        required(resolver.course(course, department_ids).await?, "Course", course)
    }

    pub async fn create(&self, params: CreateUnitParams) -> Result<Unit, AppError> {
        let name = non_blank(&params.name, "name")?;

        let unit = UnitRepository::new(self.db)
            .create(name, params.course_id, Some(params.created_by))
            .await?;

        tracing::info!("Created unit {} ({})", unit.name, unit.id);

        load(self.db, unit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Unit>, AppError> {
        match UnitRepository::new(self.db).find_by_id(id).await? {
            Some(unit) => Ok(Some(load(self.db, unit).await?)),
            None => Ok(None),
        }
    }

    /// Lists units, optionally within a course. An unknown course yields an empty list.
    pub async fn get_all(&self, course: Option<&Lookup>) -> Result<Vec<Unit>, AppError> {
        let Some(course_ids) = Resolver::new(self.db)
            .course_scope(course, None, None, None)
            .await?
            .into_filter()
        else {
            return Ok(Vec::new());
        };

        let units = UnitRepository::new(self.db).get_all(course_ids).await?;

        let mut items = Vec::with_capacity(units.len());
        for unit in units {
            items.push(load(self.db, unit).await?);
        }

        Ok(items)
    }

    /// Finds the id of the unit a lookup request targets.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        course: Option<&Lookup>,
        department: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = UnitRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|unit| unit.id)),
            LookupTarget::Name(name) => {
                let Some(course_ids) = Resolver::new(self.db)
                    .course_scope(course, department, None, None)
                    .await?
                    .into_filter()
                else {
                    return Ok(None);
                };

                let unit = single_match(repo.find_by_name(name, course_ids).await?, "unit", name)?;

                Ok(unit.map(|unit| unit.id))
            }
        }
    }

    pub async fn rename(&self, id: i32, name: Option<String>) -> Result<Option<Unit>, AppError> {
        let repo = UnitRepository::new(self.db);

        let Some(unit) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let unit = match name {
            Some(name) => repo.rename(unit, non_blank(&name, "name")?).await?,
            None => unit,
        };

        Ok(Some(load(self.db, unit).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UnitRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted unit {}", id);

        Ok(true)
    }
}

async fn load<C: ConnectionTrait>(db: &C, unit: entity::unit::Model) -> Result<Unit, AppError> {
    let course = CourseRepository::new(db)
        .find_by_id(unit.course_id)
        .await?
        .ok_or_else(|| AppError::not_found("Course"))?;
    let users = UserRepository::new(db).usernames(unit.created_by_id).await?;

    Ok(Unit {
        id: unit.id,
        name: unit.name,
        department_id: course.department_id,
        course: NamedRef::new(course.id, course.name),
        created_by: users.get(unit.created_by_id),
    })
}
