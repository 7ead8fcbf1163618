use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        lecture::{
            CreateLectureDto, LectureDto, LectureLookupQuery, LectureQuery, UpdateLectureDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            lecture::{CreateLectureParams, LectureFilter, UpdateLectureParams},
            lookup::LookupTarget,
        },
        service::lecture::LectureService,
        state::AppState,
    },
};

/// Tag for grouping lecture endpoints in OpenAPI documentation
pub static LECTURE_TAG: &str = "lecture";

#[derive(Default)]
struct Scope {
    unit: Option<Lookup>,
    date: Option<NaiveDate>,
}

impl Scope {
    fn from_query(query: &LectureLookupQuery) -> Self {
        Self {
            unit: query.unit.as_deref().map(Lookup::parse),
            date: query.date,
        }
    }
}

/// Schedule a lecture taught by the caller.
///
/// The caller must have a lecturer profile. The unit may be named, in which case
/// `course` narrows the name match.
///
/// # Returns
/// - `201 Created` - The scheduled lecture
/// - `400 Bad Request` - No lecturer profile, unknown unit, bad times or a duplicate
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/lectures",
    tag = LECTURE_TAG,
    request_body = CreateLectureDto,
    responses(
        (status = 201, description = "Successfully created lecture", body = LectureDto),
        (status = 400, description = "Invalid lecture data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_lecture(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateLectureDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = LectureService::new(&state.db);

    let Some(lecturer_id) = service.lecturer_id_for(user.id).await? else {
        return Err(AppError::BadRequest(
            "You must have a lecturer profile to schedule lectures.".to_string(),
        ));
    };
    let unit_id = service
        .resolve_unit(&payload.unit, payload.course.as_ref())
        .await?;

    let params = CreateLectureParams::from_dto(payload, lecturer_id, unit_id);

    let lecture = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(lecture.into_dto())))
}

/// List lectures, optionally by unit and lecturer.
#[utoipa::path(
    get,
    path = "/api/lectures",
    tag = LECTURE_TAG,
    params(LectureQuery),
    responses(
        (status = 200, description = "Successfully retrieved lectures", body = Vec<LectureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lectures(
    State(state): State<AppState>,
    Query(query): Query<LectureQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = LectureService::new(&state.db);

    let filter = LectureFilter {
        unit: query.unit.as_deref().map(Lookup::parse),
        lecturer: query.lecturer.as_deref().map(Lookup::parse),
    };

    let lectures = service.get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(lectures.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/lectures/{id}",
    tag = LECTURE_TAG,
    params(("id" = i32, Path, description = "Lecture ID")),
    responses(
        (status = 200, description = "Successfully retrieved lecture", body = LectureDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), &Scope::default()).await
}

/// Update a lecture.
///
/// # Access Control
/// - `SelfOrInstitutionAdmin` - Caller teaches the lecture or administers the
///   lecturer's institution
#[utoipa::path(
    patch,
    path = "/api/lectures/{id}",
    tag = LECTURE_TAG,
    params(("id" = i32, Path, description = "Lecture ID")),
    request_body = UpdateLectureDto,
    responses(
        (status = 200, description = "Successfully updated lecture", body = LectureDto),
        (status = 400, description = "Invalid lecture data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this lecture", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_lecture(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLectureDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), &Scope::default(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/lectures/{id}",
    tag = LECTURE_TAG,
    params(("id" = i32, Path, description = "Lecture ID")),
    responses(
        (status = 204, description = "Successfully deleted lecture"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this lecture", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_lecture(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), &Scope::default()).await
}

/// Get a lecture by id, or by name narrowed by unit and date.
#[utoipa::path(
    get,
    path = "/api/lectures/lookup",
    tag = LECTURE_TAG,
    params(LectureLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved lecture", body = LectureDto),
        (status = 400, description = "Missing lookup parameters or ambiguous name", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_lecture(
    State(state): State<AppState>,
    Query(query): Query<LectureLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scope = Scope::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, &scope).await
}

#[utoipa::path(
    patch,
    path = "/api/lectures/lookup",
    tag = LECTURE_TAG,
    params(LectureLookupQuery),
    request_body = UpdateLectureDto,
    responses(
        (status = 200, description = "Successfully updated lecture", body = LectureDto),
        (status = 400, description = "Invalid lecture data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this lecture", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_lecture_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<LectureLookupQuery>,
    Json(payload): Json<UpdateLectureDto>,
) -> Result<impl IntoResponse, AppError> {
    let scope = Scope::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, &scope, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/lectures/lookup",
    tag = LECTURE_TAG,
    params(LectureLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted lecture"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this lecture", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_lecture_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<LectureLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scope = Scope::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, &scope).await
}

async fn find_id(
    service: &LectureService<'_>,
    target: &LookupTarget,
    scope: &Scope,
) -> Result<i32, AppError> {
    service
        .find_id(target, scope.unit.as_ref(), scope.date)
        .await?
        .ok_or_else(|| AppError::not_found("Lecture"))
}

async fn authorize(
    state: &AppState,
    service: &LectureService<'_>,
    token: &BearerToken,
    target: &LookupTarget,
    scope: &Scope,
) -> Result<i32, AppError> {
    let id = find_id(service, target, scope).await?;

    let owner = service
        .get_owner(id)
        .await?
        .ok_or_else(|| AppError::not_found("Lecture"))?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::SelfOrInstitutionAdmin {
            user_id: owner.user_id,
            institution_id: owner.institution_id,
        }])
        .await?;

    Ok(id)
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    scope: &Scope,
) -> Result<impl IntoResponse, AppError> {
    let service = LectureService::new(&state.db);

    let id = find_id(&service, target, scope).await?;

    match service.get_by_id(id).await? {
        Some(lecture) => Ok((StatusCode::OK, Json(lecture.into_dto()))),
        None => Err(AppError::not_found("Lecture")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    scope: &Scope,
    payload: UpdateLectureDto,
) -> Result<impl IntoResponse, AppError> {
    let service = LectureService::new(&state.db);

    let id = authorize(state, &service, token, target, scope).await?;

    match service.update(id, UpdateLectureParams::from(payload)).await? {
        Some(lecture) => Ok((StatusCode::OK, Json(lecture.into_dto()))),
        None => Err(AppError::not_found("Lecture")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    scope: &Scope,
) -> Result<impl IntoResponse, AppError> {
    let service = LectureService::new(&state.db);

    let id = authorize(state, &service, token, target, scope).await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Lecture"))
    }
}
