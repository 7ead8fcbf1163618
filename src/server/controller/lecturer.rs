use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        lecturer::{
            CreateLecturerDto, LecturerDto, LecturerLookupQuery, LecturerQuery, UpdateLecturerDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            lecturer::{CreateLecturerParams, LecturerFilter, UpdateLecturerParams},
            lookup::LookupTarget,
        },
        service::{
            lecturer::LecturerService,
            resolve::{required, Resolver},
        },
        state::AppState,
    },
};

/// Tag for grouping lecturer endpoints in OpenAPI documentation
pub static LECTURER_TAG: &str = "lecturer";

/// Register a lecturer profile.
///
/// The profile belongs to the caller unless `user` names another account, in which
/// case the caller must administer the lecturer's institution.
///
/// # Access Control
/// - `SelfOrInstitutionAdmin` - Caller is the profile's user or an admin of its institution
///
/// # Returns
/// - `201 Created` - The created profile
/// - `400 Bad Request` - Unknown references, existing profile or foreign department
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Creating a profile for someone else without institution admin rights
#[utoipa::path(
    post,
    path = "/api/lecturers",
    tag = LECTURER_TAG,
    request_body = CreateLecturerDto,
    responses(
        (status = 201, description = "Successfully created lecturer", body = LecturerDto),
        (status = 400, description = "Invalid lecturer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not create this profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_lecturer(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateLecturerDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &token);
    let caller = guard.authenticate().await?;

    let resolver = Resolver::new(&state.db);
    let user_id = match &payload.user {
        Some(lookup) => required(resolver.user(lookup).await?, "User", lookup)?.id,
        None => caller.id,
    };
    let institution_id = match &payload.institution {
        Some(lookup) => Some(
            required(resolver.institution(lookup).await?, "Institution", lookup)?.id,
        ),
        None => None,
    };

    guard
        .authorize(
            &caller,
            &[Permission::SelfOrInstitutionAdmin {
                user_id,
                institution_id,
            }],
        )
        .await?;

    let service = LecturerService::new(&state.db);

    let params = CreateLecturerParams::from_dto(payload, user_id, institution_id);

    let lecturer = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(lecturer.into_dto())))
}

/// List lecturers, optionally by institution and department.
#[utoipa::path(
    get,
    path = "/api/lecturers",
    tag = LECTURER_TAG,
    params(LecturerQuery),
    responses(
        (status = 200, description = "Successfully retrieved lecturers", body = Vec<LecturerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecturers(
    State(state): State<AppState>,
    Query(query): Query<LecturerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = LecturerService::new(&state.db);

    let filter = LecturerFilter {
        institution: query.institution.as_deref().map(Lookup::parse),
        department: query.department.as_deref().map(Lookup::parse),
    };

    let lecturers = service.get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(lecturers.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/lecturers/{id}",
    tag = LECTURER_TAG,
    params(("id" = i32, Path, description = "Lecturer ID")),
    responses(
        (status = 200, description = "Successfully retrieved lecturer", body = LecturerDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), None).await
}

/// Update a lecturer's institution or departments.
///
/// # Access Control
/// - `SelfOrInstitutionAdmin` - Caller is the lecturer or an admin of their institution
#[utoipa::path(
    patch,
    path = "/api/lecturers/{id}",
    tag = LECTURER_TAG,
    params(("id" = i32, Path, description = "Lecturer ID")),
    request_body = UpdateLecturerDto,
    responses(
        (status = 200, description = "Successfully updated lecturer", body = LecturerDto),
        (status = 400, description = "Invalid lecturer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this profile", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_lecturer(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLecturerDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), None, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/lecturers/{id}",
    tag = LECTURER_TAG,
    params(("id" = i32, Path, description = "Lecturer ID")),
    responses(
        (status = 204, description = "Successfully deleted lecturer"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this profile", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_lecturer(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), None).await
}

/// Get a lecturer by id, or by username within an optional institution.
#[utoipa::path(
    get,
    path = "/api/lecturers/lookup",
    tag = LECTURER_TAG,
    params(LecturerLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved lecturer", body = LecturerDto),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_lecturer(
    State(state): State<AppState>,
    Query(query): Query<LecturerLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    get(&state, &target, institution.as_ref()).await
}

#[utoipa::path(
    patch,
    path = "/api/lecturers/lookup",
    tag = LECTURER_TAG,
    params(LecturerLookupQuery),
    request_body = UpdateLecturerDto,
    responses(
        (status = 200, description = "Successfully updated lecturer", body = LecturerDto),
        (status = 400, description = "Invalid lecturer data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this profile", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_lecturer_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<LecturerLookupQuery>,
    Json(payload): Json<UpdateLecturerDto>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    update(&state, &token, &target, institution.as_ref(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/lecturers/lookup",
    tag = LECTURER_TAG,
    params(LecturerLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted lecturer"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this profile", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_lecturer_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<LecturerLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    delete(&state, &token, &target, institution.as_ref()).await
}

async fn find_id(
    service: &LecturerService<'_>,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    service
        .find_id(target, institution)
        .await?
        .ok_or_else(|| AppError::not_found("Lecturer"))
}

/// Resolves the lecturer and checks the caller owns the profile or administers its
/// institution.
async fn authorize(
    state: &AppState,
    service: &LecturerService<'_>,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    let id = find_id(service, target, institution).await?;

    let owner = service
        .get_owner(id)
        .await?
        .ok_or_else(|| AppError::not_found("Lecturer"))?;

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
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = LecturerService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    match service.get_by_id(id).await? {
        Some(lecturer) => Ok((StatusCode::OK, Json(lecturer.into_dto()))),
        None => Err(AppError::not_found("Lecturer")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
    payload: UpdateLecturerDto,
) -> Result<impl IntoResponse, AppError> {
    let service = LecturerService::new(&state.db);

    let id = authorize(state, &service, token, target, institution).await?;

    match service
        .update(id, UpdateLecturerParams::from(payload))
        .await?
    {
        Some(lecturer) => Ok((StatusCode::OK, Json(lecturer.into_dto()))),
        None => Err(AppError::not_found("Lecturer")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = LecturerService::new(&state.db);

    let id = authorize(state, &service, token, target, institution).await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Lecturer"))
    }
}
