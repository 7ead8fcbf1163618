use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        school::{CreateSchoolDto, SchoolDto, SchoolLookupQuery, SchoolQuery, UpdateSchoolDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            lookup::LookupTarget,
            school::{CreateSchoolParams, UpdateSchoolParams},
        },
        service::{
            resolve::{required, Resolver},
            school::SchoolService,
        },
        state::AppState,
    },
};

/// Tag for grouping school endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

/// Create a new school within an institution.
///
/// The creator, head and secretary become admins of the school.
///
/// # Access Control
/// - `InstitutionAdmin` - Caller must administer the parent institution
///
/// # Returns
/// - `201 Created` - The created school
/// - `400 Bad Request` - Unknown institution, duplicate name or unknown user reference
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the institution
#[utoipa::path(
    post,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "Successfully created school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_school(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let institution = required(
        Resolver::new(&state.db)
            .institution(&payload.institution)
            .await?,
        "Institution",
        &payload.institution,
    )?;

    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::InstitutionAdmin(institution.id)])
        .await?;

    let service = SchoolService::new(&state.db);

    let params = CreateSchoolParams::from_dto(payload, institution.id, user.id);

    let school = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

/// List schools, optionally within one institution.
///
/// An institution filter that matches nothing yields an empty list.
#[utoipa::path(
    get,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    params(SchoolQuery),
    responses(
        (status = 200, description = "Successfully retrieved schools", body = Vec<SchoolDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schools(
    State(state): State<AppState>,
    Query(query): Query<SchoolQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let institution = query.institution.as_deref().map(Lookup::parse);

    let schools = service.get_all(institution.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(schools.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), None).await
}

/// Update a school.
///
/// # Access Control
/// - `SchoolAdmin` - Caller must administer the school
#[utoipa::path(
    patch,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the school", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_school(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), None, payload).await
}

/// Delete a school along with its departments.
///
/// # Access Control
/// - `SchoolAdmin` - Caller must administer the school
#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 204, description = "Successfully deleted school"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the school", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_school(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), None).await
}

/// Get a school by id, or by name within an optional institution.
#[utoipa::path(
    get,
    path = "/api/schools/lookup",
    tag = SCHOOL_TAG,
    params(SchoolLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDto),
        (status = 400, description = "Missing lookup parameters or ambiguous name", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_school(
    State(state): State<AppState>,
    Query(query): Query<SchoolLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, institution.as_ref()).await
}

#[utoipa::path(
    patch,
    path = "/api/schools/lookup",
    tag = SCHOOL_TAG,
    params(SchoolLookupQuery),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 400, description = "Invalid school data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the school", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_school_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<SchoolLookupQuery>,
    Json(payload): Json<UpdateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, institution.as_ref(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/schools/lookup",
    tag = SCHOOL_TAG,
    params(SchoolLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted school"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the school", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_school_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<SchoolLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, institution.as_ref()).await
}

async fn find_id(
    service: &SchoolService<'_>,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    service
        .find_id(target, institution)
        .await?
        .ok_or_else(|| AppError::not_found("School"))
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    match service.get_by_id(id).await? {
        Some(school) => Ok((StatusCode::OK, Json(school.into_dto()))),
        None => Err(AppError::not_found("School")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
    payload: UpdateSchoolDto,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::SchoolAdmin(id)])
        .await?;

    match service.update(id, UpdateSchoolParams::from(payload)).await? {
        Some(school) => Ok((StatusCode::OK, Json(school.into_dto()))),
        None => Err(AppError::not_found("School")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::SchoolAdmin(id)])
        .await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("School"))
    }
}
