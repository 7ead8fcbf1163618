use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::api::Lookup,
    server::{
        data::{
            document::DocumentRepository,
            lecture::{LectureChanges, LectureRepository, NewLecture},
            lecturer::LecturerRepository,
            unit::UnitRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            lecture::{
                validate_schedule, CreateLectureParams, Lecture, LectureFilter, UpdateLectureParams,
            },
            lookup::{single_match, LookupTarget},
            reference::{NamedRef, UserRef},
        },
        service::{
            lecturer::ProfileOwner,
            resolve::{non_blank, required, Resolver},
        },
    },
};

const DUPLICATE_LECTURE: &str =
    "A lecture with this name already exists for this unit on that date.";

pub struct LectureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LectureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the lecturer profile id of a user, if they have one.
    pub async fn lecturer_id_for(&self, user_id: i32) -> Result<Option<i32>, AppError> {
        Ok(LecturerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .map(|lecturer| lecturer.id))
    }

    /// Resolves the unit named in a create request, optionally within a course.
    pub async fn resolve_unit(
        &self,
        unit: &Lookup,
        course: Option<&Lookup>,
    ) -> Result<i32, AppError> {
        let resolver = Resolver::new(self.db);

        let course_ids = match course {
            Some(lookup) => Some(vec![
                required(resolver.course(lookup, None).await?, "Course", lookup)?.id,
            ]),
            None => None,
        };

        Ok(required(resolver.unit(unit, course_ids).await?, "Unit", unit)?.id)
    }

    /// Schedules a lecture and attaches its documents.
    ///
    /// # Returns
    /// - `Ok(Lecture)` - The scheduled lecture
    /// - `Err(AppError::BadRequest)` - Blank name, end not after start, a duplicate
    ///   (lecturer, unit, name, date), or an unknown document
    pub async fn create(&self, params: CreateLectureParams) -> Result<Lecture, AppError> {
        let name = non_blank(&params.name, "name")?;
        validate_schedule(params.start_time, params.end_time)?;

        let txn = self.db.begin().await?;

        let repo = LectureRepository::new(&txn);
        if repo
            .exists(params.lecturer_id, params.unit_id, &name, params.date, None)
            .await?
        {
            return Err(AppError::BadRequest(DUPLICATE_LECTURE.to_string()));
        }

        let document_ids = Resolver::new(&txn).document_ids(&params.documents).await?;

        let lecture = repo
            .create(NewLecture {
                lecturer_id: params.lecturer_id,
                unit_id: params.unit_id,
                name,
                date: params.date,
                start_time: params.start_time,
                end_time: params.end_time,
                comments: params.comments,
            })
            .await?;
        repo.set_documents(lecture.id, &document_ids).await?;

        txn.commit().await?;

        tracing::info!("Scheduled lecture {} ({})", lecture.name, lecture.id);

        load(self.db, lecture).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Lecture>, AppError> {
        match LectureRepository::new(self.db).find_by_id(id).await? {
            Some(lecture) => Ok(Some(load(self.db, lecture).await?)),
            None => Ok(None),
        }
    }

    /// Gets the lecturer's user and institution, used for permission checks.
    pub async fn get_owner(&self, id: i32) -> Result<Option<ProfileOwner>, AppError> {
        let Some(lecture) = LectureRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(LecturerRepository::new(self.db)
            .find_by_id(lecture.lecturer_id)
            .await?
            .map(|lecturer| ProfileOwner {
                user_id: lecturer.user_id,
                institution_id: lecturer.institution_id,
            }))
    }

    /// Lists lectures in schedule order. Unknown filters yield an empty list.
    pub async fn get_all(&self, filter: LectureFilter) -> Result<Vec<Lecture>, AppError> {
        let Some(unit_ids) = Resolver::new(self.db)
            .unit_scope(filter.unit.as_ref(), None, None)
            .await?
            .into_filter()
        else {
            return Ok(Vec::new());
        };

        let lecturer_id = match &filter.lecturer {
            Some(lookup) => match find_lecturer(self.db, lookup).await? {
                Some(lecturer) => Some(lecturer.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let lectures = LectureRepository::new(self.db)
            .get_all(unit_ids, lecturer_id)
            .await?;

        let mut items = Vec::with_capacity(lectures.len());
        for lecture in lectures {
            items.push(load(self.db, lecture).await?);
        }

        Ok(items)
    }

    /// Finds the lecture a lookup targets; names may be narrowed by unit and date.
    pub async fn find_id(
        &self,
        target: &LookupTarget,
        unit: Option<&Lookup>,
        date: Option<NaiveDate>,
    ) -> Result<Option<i32>, AppError> {
        let repo = LectureRepository::new(self.db);

        match target {
            LookupTarget::Id(id) => Ok(repo.find_by_id(*id).await?.map(|lecture| lecture.id)),
            LookupTarget::Name(name) => {
                let Some(unit_ids) = Resolver::new(self.db)
                    .unit_scope(unit, None, None)
                    .await?
                    .into_filter()
                else {
                    return Ok(None);
                };

                let lecture = single_match(
                    repo.find_by_name(name, unit_ids, date).await?,
                    "lecture",
                    name,
                )?;

                Ok(lecture.map(|lecture| lecture.id))
            }
        }
    }

    /// Applies a partial update, revalidating the schedule and the uniqueness of
    /// (lecturer, unit, name, date) against the merged values.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateLectureParams,
    ) -> Result<Option<Lecture>, AppError> {
        let txn = self.db.begin().await?;

        let repo = LectureRepository::new(&txn);
        let Some(lecture) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = match &params.name {
            Some(name) => Some(non_blank(name, "name")?),
            None => None,
        };

        validate_schedule(
            params.start_time.unwrap_or(lecture.start_time),
            params.end_time.unwrap_or(lecture.end_time),
        )?;

        let merged_name = name.as_deref().unwrap_or(&lecture.name);
        let merged_date = params.date.unwrap_or(lecture.date);
        if (name.is_some() || params.date.is_some())
            && repo
                .exists(
                    lecture.lecturer_id,
                    lecture.unit_id,
                    merged_name,
                    merged_date,
                    Some(lecture.id),
                )
                .await?
        {
            return Err(AppError::BadRequest(DUPLICATE_LECTURE.to_string()));
        }

        if let Some(documents) = &params.documents {
            let document_ids = Resolver::new(&txn).document_ids(documents).await?;
            repo.set_documents(lecture.id, &document_ids).await?;
        }

        let lecture = repo
            .update(
                lecture,
                LectureChanges {
                    name,
                    date: params.date,
                    start_time: params.start_time,
                    end_time: params.end_time,
                    comments: params.comments,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(Some(load(self.db, lecture).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = LectureRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::info!("Deleted lecture {}", id);

        Ok(true)
    }
}

/// Finds a lecturer by profile id or by the username of its user.
async fn find_lecturer<C: ConnectionTrait>(
    db: &C,
    lookup: &Lookup,
) -> Result<Option<entity::lecturer::Model>, AppError> {
    let repo = LecturerRepository::new(db);

    match lookup {
        Lookup::Id(id) => Ok(repo.find_by_id(*id).await?),
        Lookup::Name(username) => {
            match UserRepository::new(db).find_by_username(username).await? {
                Some(user) => Ok(repo.find_by_user_id(user.id).await?),
                None => Ok(None),
            }
        }
    }
}

async fn load<C: ConnectionTrait>(
    db: &C,
    lecture: entity::lecture::Model,
) -> Result<Lecture, AppError> {
    let lecturer = LecturerRepository::new(db)
        .find_by_id(lecture.lecturer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Lecturer"))?;
    let unit = UnitRepository::new(db)
        .find_by_id(lecture.unit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Unit"))?;

    let users = UserRepository::new(db).usernames([lecturer.user_id]).await?;
    let lecturer_user = users.get(Some(lecturer.user_id)).unwrap_or(UserRef {
        id: lecturer.user_id,
        username: String::new(),
    });

    let document_ids: Vec<i32> = LectureRepository::new(db)
        .get_document_ids(lecture.id)
        .await?
        .into_iter()
        .collect();
    let documents = DocumentRepository::new(db).refs(document_ids).await?;

    Ok(Lecture {
        id: lecture.id,
        lecturer_id: lecturer.id,
        lecturer: lecturer_user,
        unit: NamedRef::new(unit.id, unit.name),
        name: lecture.name,
        date: lecture.date,
        start_time: lecture.start_time,
        end_time: lecture.end_time,
        comments: lecture.comments,
        documents,
    })
}
