use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use url::Url;

use crate::{
    model::api::Lookup,
    server::{
        data::{
            department::DepartmentRepository, document::DocumentRepository,
            institution::InstitutionRepository, school::SchoolRepository,
            student::StudentRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            lookup::LookupTarget,
            reference::{NamedRef, UserRef},
            student::{
                CreateStudentParams, Student, StudentDocument, StudentFilter, StudentPlacement,
                UpdateStudentParams,
            },
        },
        service::{
            lecturer::ProfileOwner,
            resolve::{required, Resolver},
        },
        util::links::document_download_url,
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student profile for a user.
    ///
    /// # Returns
    /// - `Ok(Student)` - The new profile
    /// - `Err(AppError::BadRequest)` - The user already has a profile, or the placement
    ///   references a missing record or a level outside the one above it
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;

        let repo = StudentRepository::new(&txn);
        if repo.find_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "This user already has a student profile.".to_string(),
            ));
        }

        let placement = resolve_placement(
            &txn,
            params.institution.as_ref(),
            params.school.as_ref(),
            params.department.as_ref(),
        )
        .await?;

        let student = repo.create(params.user_id, placement).await?;

        txn.commit().await?;

        tracing::info!(
            "Created student profile {} for user {}",
            student.id,
            student.user_id
        );

        load(self.db, student).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        match StudentRepository::new(self.db).find_by_id(id).await? {
            Some(student) => Ok(Some(load(self.db, student).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_owner(&self, id: i32) -> Result<Option<ProfileOwner>, AppError> {
        Ok(StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(|student| ProfileOwner {
                user_id: student.user_id,
                institution_id: student.institution_id,
            }))
    }

    /// Lists students matching every given placement filter. Unknown filters yield an
    /// empty list.
    pub async fn get_all(&self, filter: StudentFilter) -> Result<Vec<Student>, AppError> {
        let resolver = Resolver::new(self.db);
        let mut placement = StudentPlacement::default();

        if let Some(lookup) = &filter.institution {
            match resolver.institution(lookup).await? {
                Some(institution) => placement.institution_id = Some(institution.id),
                None => return Ok(Vec::new()),
            }
        }
        if let Some(lookup) = &filter.school {
            match resolver.school(lookup, placement.institution_id).await? {
                Some(school) => placement.school_id = Some(school.id),
                None => return Ok(Vec::new()),
            }
        }
        if let Some(lookup) = &filter.department {
            let school_ids = placement.school_id.map(|id| vec![id]);
            match resolver.department(lookup, school_ids).await? {
                Some(department) => placement.department_id = Some(department.id),
                None => return Ok(Vec::new()),
            }
        }

        let students = StudentRepository::new(self.db).get_all(placement).await?;

        let mut items = Vec::with_capacity(students.len());
        for student in students {
            items.push(load(self.db, student).await?);
        }

        Ok(items)
    }

    /// Finds the student a lookup targets, by profile id or by username.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        institution: Option<&Lookup>,
    ) -> Result<Option<i32>, AppError> {
        let repo = StudentRepository::new(self.db);

        let student = match target {
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

        let Some(student) = student else {
            return Ok(None);
        };

        if let Some(lookup) = institution {
            let institution = Resolver::new(self.db).institution(lookup).await?;
            if institution.map(|i| i.id) != student.institution_id {
                return Ok(None);
            }
        }

        Ok(Some(student.id))
    }

    /// Changes the placement. Omitted levels keep their stored value and the merged
    /// placement is validated as a whole.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<Option<Student>, AppError> {
        let txn = self.db.begin().await?;

        let repo = StudentRepository::new(&txn);
        let Some(student) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let institution = merge_level(params.institution, student.institution_id);
        let school = merge_level(params.school, student.school_id);
        let department = merge_level(params.department, student.department_id);

        let placement = resolve_placement(
            &txn,
            institution.as_ref(),
            school.as_ref(),
            department.as_ref(),
        )
        .await?;

        let current = StudentPlacement {
            institution_id: student.institution_id,
            school_id: student.school_id,
            department_id: student.department_id,
        };
        let student = if placement != current {
            repo.set_placement(student, placement).await?
        } else {
            student
        };

        txn.commit().await?;

        Ok(Some(load(self.db, student).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted student profile {}", id);

        Ok(true)
    }

    /// Gets download links for the documents the student's user uploaded, newest first.
    pub async fn documents(
        &self,
        id: i32,
        app_url: &Url,
    ) -> Result<Option<Vec<StudentDocument>>, AppError> {
        let Some(student) = StudentRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let repo = DocumentRepository::new(self.db);
        let documents = repo.get_by_uploader(student.user_id).await?;
        let mut categories = repo
            .categories_for(documents.iter().map(|document| document.id).collect())
            .await?;

        Ok(Some(
            documents
                .into_iter()
                .map(|document| StudentDocument {
                    download_url: document_download_url(app_url, document.id),
                    categories: categories.remove(&document.id).unwrap_or_default(),
                    title: document.title,
                    author: document.author,
                    created_at: document.created_at,
                })
                .collect(),
        ))
    }
}

/// Keeps a stored level as an id lookup unless the patch sets or clears it.
fn merge_level(requested: Option<Option<Lookup>>, stored: Option<i32>) -> Option<Lookup> {
    match requested {
        Some(level) => level,
        None => stored.map(Lookup::Id),
    }
}

/// Resolves a placement, filling in the levels above the lowest one given and rejecting
/// levels that do not nest.
async fn resolve_placement<C: ConnectionTrait>(
    db: &C,
    institution: Option<&Lookup>,
    school: Option<&Lookup>,
    department: Option<&Lookup>,
) -> Result<StudentPlacement, AppError> {
    let resolver = Resolver::new(db);

    let mut institution_id = match institution {
        Some(lookup) => Some(required(resolver.institution(lookup).await?, "Institution", lookup)?.id),
        None => None,
    };

    let mut school_id = match school {
        Some(lookup) => {
            let school = required(resolver.school(lookup, institution_id).await?, "School", lookup)?;
            match institution_id {
                Some(id) if id != school.institution_id => {
                    return Err(AppError::BadRequest(
                        "The school must belong to the student's institution.".to_string(),
                    ))
                }
                _ => institution_id = Some(school.institution_id),
            }
            Some(school.id)
        }
        None => None,
    };

    let department_id = match department {
        Some(lookup) => {
            let department = required(
                resolver.department(lookup, school_id.map(|id| vec![id])).await?,
                "Department",
                lookup,
            )?;
            match school_id {
                Some(id) if id != department.school_id => {
                    return Err(AppError::BadRequest(
                        "The department must belong to the student's school.".to_string(),
                    ))
                }
                Some(_) => {}
                None => {
                    let school = SchoolRepository::new(db)
                        .find_by_id(department.school_id)
                        .await?
                        .ok_or_else(|| AppError::not_found("School"))?;
                    if institution_id.is_some_and(|id| id != school.institution_id) {
                        return Err(AppError::BadRequest(
                            "The department must belong to the student's institution."
                                .to_string(),
                        ));
                    }
                    institution_id = Some(school.institution_id);
                    school_id = Some(school.id);
                }
            }
            Some(department.id)
        }
        None => None,
    };

    Ok(StudentPlacement {
        institution_id,
        school_id,
        department_id,
    })
}

async fn load<C: ConnectionTrait>(
    db: &C,
    student: entity::student::Model,
) -> Result<Student, AppError> {
    let users = UserRepository::new(db).usernames([student.user_id]).await?;
    let user = users.get(Some(student.user_id)).unwrap_or(UserRef {
        id: student.user_id,
        username: String::new(),
    });

    let institution = match student.institution_id {
        Some(id) => InstitutionRepository::new(db).refs(vec![id]).await?.pop(),
        None => None,
    };
    let school = match student.school_id {
        Some(id) => SchoolRepository::new(db).refs(vec![id]).await?.pop(),
        None => None,
    };
    let department: Option<NamedRef> = match student.department_id {
        Some(id) => DepartmentRepository::new(db).refs(vec![id]).await?.pop(),
        None => None,
    };

    Ok(Student {
        id: student.id,
        user,
        institution,
        school,
        department,
    })
}
