use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        unit::{CreateUnitDto, UnitDto, UnitLookupQuery, UnitQuery, UpdateUnitDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{course::CreateUnitParams, lookup::LookupTarget},
        service::unit::UnitService,
        state::AppState,
    },
};

/// Tag for grouping unit endpoints in OpenAPI documentation
pub static UNIT_TAG: &str = "unit";

#[derive(Default)]
struct Ancestors {
    course: Option<Lookup>,
    department: Option<Lookup>,
}

impl Ancestors {
    fn from_query(query: &UnitLookupQuery) -> Self {
        Self {
            course: query.course.as_deref().map(Lookup::parse),
            department: query.department.as_deref().map(Lookup::parse),
        }
    }
}

/// Create a new unit within a course.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the department owning the course
///
/// # Returns
/// - `201 Created` - The created unit
/// - `400 Bad Request` - Blank name, unknown or ambiguous course
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the department
#[utoipa::path(
    post,
    path = "/api/units",
    tag = UNIT_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Successfully created unit", body = UnitDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_unit(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UnitService::new(&state.db);

    let course = service
        .resolve_course(&payload.course, payload.department.as_ref())
        .await?;

    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::DepartmentAdmin(course.department_id)])
        .await?;

    let unit = service
        .create(CreateUnitParams {
            name: payload.name,
            course_id: course.id,
            created_by: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/units",
    tag = UNIT_TAG,
    params(UnitQuery),
    responses(
        (status = 200, description = "Successfully retrieved units", body = Vec<UnitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(
    State(state): State<AppState>,
    Query(query): Query<UnitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = UnitService::new(&state.db);

    let course = query.course.as_deref().map(Lookup::parse);

    let units = service.get_all(course.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(units.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Successfully retrieved unit", body = UnitDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), &Ancestors::default()).await
}

/// Rename a unit.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the department owning the unit's course
#[utoipa::path(
    patch,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Unit ID")),
    request_body = UpdateUnitDto,
    responses(
        (status = 200, description = "Successfully updated unit", body = UnitDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_unit(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), &Ancestors::default(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Unit ID")),
    responses(
        (status = 204, description = "Successfully deleted unit"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), &Ancestors::default()).await
}

/// Get a unit by id, or by name narrowed by course and department.
#[utoipa::path(
    get,
    path = "/api/units/lookup",
    tag = UNIT_TAG,
    params(UnitLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved unit", body = UnitDto),
        (status = 400, description = "Missing lookup parameters or ambiguous name", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_unit(
    State(state): State<AppState>,
    Query(query): Query<UnitLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, &ancestors).await
}

#[utoipa::path(
    patch,
    path = "/api/units/lookup",
    tag = UNIT_TAG,
    params(UnitLookupQuery),
    request_body = UpdateUnitDto,
    responses(
        (status = 200, description = "Successfully updated unit", body = UnitDto),
        (status = 400, description = "Blank name or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_unit_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<UnitLookupQuery>,
    Json(payload): Json<UpdateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, &ancestors, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/units/lookup",
    tag = UNIT_TAG,
    params(UnitLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted unit"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_unit_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<UnitLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, &ancestors).await
}

async fn find_id(
    service: &UnitService<'_>,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<i32, AppError> {
    service
        .find_id(target, ancestors.course.as_ref(), ancestors.department.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Unit"))
}

/// Resolves the unit and checks the caller administers the department above it.
async fn authorize(
    state: &AppState,
    service: &UnitService<'_>,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<i32, AppError> {
    let id = find_id(service, target, ancestors).await?;

    let unit = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Unit"))?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::DepartmentAdmin(unit.department_id)])
        .await?;

    Ok(id)
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = UnitService::new(&state.db);

    let id = find_id(&service, target, ancestors).await?;

    match service.get_by_id(id).await? {
        Some(unit) => Ok((StatusCode::OK, Json(unit.into_dto()))),
        None => Err(AppError::not_found("Unit")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
    payload: UpdateUnitDto,
) -> Result<impl IntoResponse, AppError> {
    let service = UnitService::new(&state.db);

    let id = authorize(state, &service, token, target, ancestors).await?;

    match service.rename(id, payload.name).await? {
        Some(unit) => Ok((StatusCode::OK, Json(unit.into_dto()))),
        None => Err(AppError::not_found("Unit")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = UnitService::new(&state.db);

    let id = authorize(state, &service, token, target, ancestors).await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Unit"))
    }
}
