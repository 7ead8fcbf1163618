use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        institution::{
            CreateInstitutionDto, InstitutionDto, InstitutionLookupQuery, InstitutionQuery,
            PaginatedInstitutionsDto, UpdateInstitutionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            institution::{CreateInstitutionParams, UpdateInstitutionParams},
            lookup::LookupTarget,
            page::Pagination,
        },
        service::institution::InstitutionService,
        state::AppState,
    },
};

/// Tag for grouping institution endpoints in OpenAPI documentation
pub static INSTITUTION_TAG: &str = "institution";

/// Create a new institution.
///
/// Any authenticated user may create an institution and becomes its creator. The
/// creator, chancellor and vice-chancellor are added to the admins alongside any
/// admins listed in the request.
///
/// # Returns
/// - `201 Created` - The created institution
/// - `400 Bad Request` - Blank fields, duplicate name or unknown user reference
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/institutions",
    tag = INSTITUTION_TAG,
    request_body = CreateInstitutionDto,
    responses(
        (status = 201, description = "Successfully created institution", body = InstitutionDto),
        (status = 400, description = "Invalid institution data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_institution(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateInstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = InstitutionService::new(&state.db);

    let params = CreateInstitutionParams::from_dto(payload, user.id);

    let institution = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(institution.into_dto())))
}

/// Get a page of institutions.
///
/// Institutions are ordered by name and can be narrowed to a single category.
///
/// # Returns
/// - `200 OK` - Requested page along with totals
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/institutions",
    tag = INSTITUTION_TAG,
    params(InstitutionQuery),
    responses(
        (status = 200, description = "Successfully retrieved institutions", body = PaginatedInstitutionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_institutions(
    State(state): State<AppState>,
    Query(query): Query<InstitutionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstitutionService::new(&state.db);

    let pagination = Pagination::new(query.page, query.entries);
    let category = query.category.as_deref().map(str::trim);

    let institutions = service.get_paginated(category, pagination).await?;

    Ok((StatusCode::OK, Json(institutions.into_dto())))
}

/// Get an institution by id.
///
/// # Returns
/// - `200 OK` - Institution with its admins and schools
/// - `404 Not Found` - No institution with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/institutions/{id}",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution ID")),
    responses(
        (status = 200, description = "Successfully retrieved institution", body = InstitutionDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_institution(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id)).await
}

/// Update an institution.
///
/// Only admins of the institution may update it. Role changes swap admin status from
/// the old holder to the new one; `remove_admins` never removes a current role holder.
///
/// # Access Control
/// - `InstitutionAdmin` - Caller must administer the institution
///
/// # Returns
/// - `200 OK` - Updated institution
/// - `400 Bad Request` - Blank fields, duplicate name or unknown user reference
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the institution
/// - `404 Not Found` - No institution with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/institutions/{id}",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution ID")),
    request_body = UpdateInstitutionDto,
    responses(
        (status = 200, description = "Successfully updated institution", body = InstitutionDto),
        (status = 400, description = "Invalid institution data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the institution", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_institution(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), payload).await
}

/// Delete an institution along with its schools, departments, courses and units.
///
/// # Access Control
/// - `InstitutionAdmin` - Caller must administer the institution
///
/// # Returns
/// - `204 No Content` - Institution deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the institution
/// - `404 Not Found` - No institution with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/institutions/{id}",
    tag = INSTITUTION_TAG,
    params(("id" = i32, Path, description = "Institution ID")),
    responses(
        (status = 204, description = "Successfully deleted institution"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the institution", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_institution(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id)).await
}

/// Get an institution by id or name.
///
/// # Returns
/// - `200 OK` - Matching institution
/// - `400 Bad Request` - Neither `id` nor `name` given
/// - `404 Not Found` - Nothing matched
#[utoipa::path(
    get,
    path = "/api/institutions/lookup",
    tag = INSTITUTION_TAG,
    params(InstitutionLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved institution", body = InstitutionDto),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_institution(
    State(state): State<AppState>,
    Query(query): Query<InstitutionLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target).await
}

/// Update an institution found by id or name.
#[utoipa::path(
    patch,
    path = "/api/institutions/lookup",
    tag = INSTITUTION_TAG,
    params(InstitutionLookupQuery),
    request_body = UpdateInstitutionDto,
    responses(
        (status = 200, description = "Successfully updated institution", body = InstitutionDto),
        (status = 400, description = "Invalid institution data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the institution", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_institution_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<InstitutionLookupQuery>,
    Json(payload): Json<UpdateInstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, payload).await
}

/// Delete an institution found by id or name.
#[utoipa::path(
    delete,
    path = "/api/institutions/lookup",
    tag = INSTITUTION_TAG,
    params(InstitutionLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted institution"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the institution", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_institution_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<InstitutionLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target).await
}

async fn find_id(service: &InstitutionService<'_>, target: &LookupTarget) -> Result<i32, AppError> {
    service
        .find_id(target)
        .await?
        .ok_or_else(|| AppError::not_found("Institution"))
}

async fn get(state: &AppState, target: &LookupTarget) -> Result<impl IntoResponse, AppError> {
    let service = InstitutionService::new(&state.db);

    let id = find_id(&service, target).await?;

    match service.get_by_id(id).await? {
        Some(institution) => Ok((StatusCode::OK, Json(institution.into_dto()))),
        None => Err(AppError::not_found("Institution")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    payload: UpdateInstitutionDto,
) -> Result<impl IntoResponse, AppError> {
    let service = InstitutionService::new(&state.db);

    let id = find_id(&service, target).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::InstitutionAdmin(id)])
        .await?;

    let institution = service
        .update(id, UpdateInstitutionParams::from(payload))
        .await?;

    match institution {
        Some(institution) => Ok((StatusCode::OK, Json(institution.into_dto()))),
        None => Err(AppError::not_found("Institution")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
) -> Result<impl IntoResponse, AppError> {
    let service = InstitutionService::new(&state.db);

    let id = find_id(&service, target).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::InstitutionAdmin(id)])
        .await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Institution"))
    }
}
