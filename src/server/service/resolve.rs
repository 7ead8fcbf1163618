//! Resolution of `Lookup` references (id or case-insensitive name) into stored records.
//!
//! Finders return `Ok(None)` when nothing matches so callers can choose the failure mode:
//! a dangling reference in a request body is a 400 (`required`), a lookup endpoint that
//! finds nothing is a 404, and a list filter that finds nothing yields an empty list.

use std::collections::BTreeSet;

use sea_orm::ConnectionTrait;

use crate::{
    model::api::Lookup,
    server::{
        data::{
            category::CategoryRepository, course::CourseRepository,
            department::DepartmentRepository, document::DocumentRepository,
            institution::InstitutionRepository, school::SchoolRepository, unit::UnitRepository,
            user::UserRepository,
        },
        error::AppError,
        model::lookup::single_match,
    },
};

/// Set of parent ids a listing or name lookup is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// No filter was given.
    All,
    /// Only records under these parents.
    Within(Vec<i32>),
    /// A filter named a parent that does not exist, so nothing can match.
    Missing,
}

impl Scope {
    /// Converts into a repository filter; `None` means the result is known to be empty.
    pub fn into_filter(self) -> Option<Option<Vec<i32>>> {
        match self {
            Self::All => Some(None),
            Self::Within(ids) => Some(Some(ids)),
            Self::Missing => None,
        }
    }
}

pub struct Resolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Resolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a user by id or username.
    pub async fn user(&self, lookup: &Lookup) -> Result<Option<entity::user::Model>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(match lookup {
            Lookup::Id(id) => repo.find_by_id(*id).await?,
            Lookup::Name(username) => repo.find_by_username(username).await?,
        })
    }

    /// Resolves a list of user references, failing on the first that does not exist.
    pub async fn user_ids(&self, lookups: &[Lookup]) -> Result<BTreeSet<i32>, AppError> {
        let mut ids = BTreeSet::new();

        for lookup in lookups {
            let user = required(self.user(lookup).await?, "User", lookup)?;
            ids.insert(user.id);
        }

        Ok(ids)
    }

    /// Resolves an optional user reference given in a request body.
    pub async fn optional_user_id(&self, lookup: Option<&Lookup>) -> Result<Option<i32>, AppError> {
        match lookup {
            Some(lookup) => Ok(Some(required(self.user(lookup).await?, "User", lookup)?.id)),
            None => Ok(None),
        }
    }

    /// Resolves a tri-state role patch into the column change it implies.
    pub async fn role_change(
        &self,
        requested: Option<&Option<Lookup>>,
    ) -> Result<Option<Option<i32>>, AppError> {
        match requested {
            None => Ok(None),
            Some(lookup) => Ok(Some(self.optional_user_id(lookup.as_ref()).await?)),
        }
    }

    pub async fn institution(
        &self,
        lookup: &Lookup,
    ) -> Result<Option<entity::institution::Model>, AppError> {
        let repo = InstitutionRepository::new(self.db);

        Ok(match lookup {
            Lookup::Id(id) => repo.find_by_id(*id).await?,
            Lookup::Name(name) => repo.find_by_name(name).await?,
        })
    }

    /// Resolves a school; names are matched within `institution_id` when given.
    pub async fn school(
        &self,
        lookup: &Lookup,
        institution_id: Option<i32>,
    ) -> Result<Option<entity::school::Model>, AppError> {
        let repo = SchoolRepository::new(self.db);

        match lookup {
            Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
            Lookup::Name(name) => {
                single_match(repo.find_by_name(name, institution_id).await?, "school", name)
            }
        }
    }

    /// Resolves a department; names are matched within `school_ids` when given.
    pub async fn department(
        &self,
        lookup: &Lookup,
        school_ids: Option<Vec<i32>>,
    ) -> Result<Option<entity::department::Model>, AppError> {
        let repo = DepartmentRepository::new(self.db);

        match lookup {
            Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
            Lookup::Name(name) => single_match(
                repo.find_by_name(name, school_ids).await?,
                "department",
                name,
            ),
        }
    }

    /// Resolves a course; names are matched within `department_ids` when given.
    pub async fn course(
        &self,
        lookup: &Lookup,
        department_ids: Option<Vec<i32>>,
    ) -> Result<Option<entity::course::Model>, AppError> {
        let repo = CourseRepository::new(self.db);

        match lookup {
            Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
            Lookup::Name(name) => single_match(
                repo.find_by_name(name, department_ids).await?,
                "course",
                name,
            ),
        }
    }

    /// Resolves a unit; names are matched within `course_ids` when given.
    pub async fn unit(
        &self,
        lookup: &Lookup,
        course_ids: Option<Vec<i32>>,
    ) -> Result<Option<entity::unit::Model>, AppError> {
        let repo = UnitRepository::new(self.db);

        match lookup {
            Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
            Lookup::Name(name) => {
                single_match(repo.find_by_name(name, course_ids).await?, "unit", name)
            }
        }
    }

    /// Narrows to a single institution.
    pub async fn institution_scope(&self, institution: Option<&Lookup>) -> Result<Scope, AppError> {
        let Some(lookup) = institution else {
            return Ok(Scope::All);
        };

        Ok(match self.institution(lookup).await? {
            Some(institution) => Scope::Within(vec![institution.id]),
            None => Scope::Missing,
        })
    }

    /// Narrows to schools: the named school (within the institution, if given) or every
    /// school of the institution.
    pub async fn school_scope(
        &self,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Scope, AppError> {
        let institution_id = match self.institution_scope(institution).await? {
            Scope::Missing => return Ok(Scope::Missing),
            Scope::Within(ids) => ids.first().copied(),
            Scope::All => None,
        };

        match (school, institution_id) {
            (Some(lookup), institution_id) => Ok(match self.school(lookup, institution_id).await? {
                Some(school) => Scope::Within(vec![school.id]),
                None => Scope::Missing,
            }),
            (None, Some(institution_id)) => Ok(Scope::Within(
                SchoolRepository::new(self.db)
                    .get_ids_by_institution(institution_id)
                    .await?,
            )),
            (None, None) => Ok(Scope::All),
        }
    }

    /// Narrows to departments: the named department (within the school scope) or every
    /// department of the school scope.
    pub async fn department_scope(
        &self,
        department: Option<&Lookup>,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Scope, AppError> {
        let Some(school_ids) = self.school_scope(school, institution).await?.into_filter() else {
            return Ok(Scope::Missing);
        };

        match (department, school_ids) {
            (Some(lookup), school_ids) => Ok(match self.department(lookup, school_ids).await? {
                Some(department) => Scope::Within(vec![department.id]),
                None => Scope::Missing,
            }),
            (None, Some(school_ids)) => Ok(Scope::Within(
                DepartmentRepository::new(self.db)
                    .get_all(Some(school_ids))
                    .await?
                    .into_iter()
                    .map(|department| department.id)
                    .collect(),
            )),
            (None, None) => Ok(Scope::All),
        }
    }

    /// Narrows to courses: the named course (within the department scope) or every
    /// course of the department scope.
    pub async fn course_scope(
        &self,
        course: Option<&Lookup>,
        department: Option<&Lookup>,
        school: Option<&Lookup>,
        institution: Option<&Lookup>,
    ) -> Result<Scope, AppError> {
        let Some(department_ids) = self
            .department_scope(department, school, institution)
            .await?
            .into_filter()
        else {
            return Ok(Scope::Missing);
        };

        match (course, department_ids) {
            (Some(lookup), department_ids) => Ok(match self.course(lookup, department_ids).await? {
                Some(course) => Scope::Within(vec![course.id]),
                None => Scope::Missing,
            }),
            (None, Some(department_ids)) => Ok(Scope::Within(
                CourseRepository::new(self.db)
                    .get_all(Some(department_ids))
                    .await?
                    .into_iter()
                    .map(|course| course.id)
                    .collect(),
            )),
            (None, None) => Ok(Scope::All),
        }
    }

    /// Narrows to units: the named unit (within the course scope) or every unit of the
    /// course scope.
    pub async fn unit_scope(
        &self,
        unit: Option<&Lookup>,
        course: Option<&Lookup>,
        department: Option<&Lookup>,
    ) -> Result<Scope, AppError> {
        let Some(course_ids) = self
            .course_scope(course, department, None, None)
            .await?
            .into_filter()
        else {
            return Ok(Scope::Missing);
        };

        match (unit, course_ids) {
            (Some(lookup), course_ids) => Ok(match self.unit(lookup, course_ids).await? {
                Some(unit) => Scope::Within(vec![unit.id]),
                None => Scope::Missing,
            }),
            (None, Some(course_ids)) => Ok(Scope::Within(
                UnitRepository::new(self.db)
                    .get_all(Some(course_ids))
                    .await?
                    .into_iter()
                    .map(|unit| unit.id)
                    .collect(),
            )),
            (None, None) => Ok(Scope::All),
        }
    }

    /// Resolves a document by id or title.
    pub async fn document(
        &self,
        lookup: &Lookup,
    ) -> Result<Option<entity::document::Model>, AppError> {
        let repo = DocumentRepository::new(self.db);

        match lookup {
            Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
            Lookup::Name(title) => single_match(repo.find_by_title(title).await?, "document", title),
        }
    }

    /// Resolves a list of document references given in a request body.
    pub async fn document_ids(&self, lookups: &[Lookup]) -> Result<BTreeSet<i32>, AppError> {
        let mut ids = BTreeSet::new();

        for lookup in lookups {
            let document = required(self.document(lookup).await?, "Document", lookup)?;
            ids.insert(document.id);
        }

        Ok(ids)
    }

    pub async fn category(
        &self,
        lookup: &Lookup,
    ) -> Result<Option<entity::category::Model>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(match lookup {
            Lookup::Id(id) => repo.find_by_id(*id).await?,
            Lookup::Name(name) => repo.find_by_name(name).await?,
        })
    }
}

/// Turns a missing body reference into a 400 naming the reference.
pub fn required<T>(found: Option<T>, kind: &str, lookup: &Lookup) -> Result<T, AppError> {
    found.ok_or_else(|| AppError::BadRequest(format!("{} '{}' does not exist.", kind, lookup)))
}

/// Trims a required text field, rejecting blank values.
pub fn non_blank(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!(
            "The {} field may not be blank.",
            field
        )));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reference_is_bad_request() {
        let result = required::<i32>(None, "School", &Lookup::Name("Law".to_string()));

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "School 'Law' does not exist."),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn missing_scope_has_no_filter() {
        assert_eq!(Scope::Missing.into_filter(), None);
        assert_eq!(Scope::All.into_filter(), Some(None));
        assert_eq!(Scope::Within(vec![1]).into_filter(), Some(Some(vec![1])));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(non_blank("  Law ", "name").unwrap(), "Law");
        assert!(non_blank("   ", "name").is_err());
    }
}
