use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        department::{
            CreateDepartmentDto, DepartmentDto, DepartmentLookupQuery, DepartmentQuery,
            UpdateDepartmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            department::{CreateDepartmentParams, UpdateDepartmentParams},
            lookup::LookupTarget,
        },
        service::{
            department::DepartmentService,
            resolve::{required, Resolver},
        },
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Ancestor filters narrowing a department name lookup.
struct Ancestors {
    school: Option<Lookup>,
    institution: Option<Lookup>,
}

impl Ancestors {
    fn none() -> Self {
        Self {
            school: None,
            institution: None,
        }
    }

    fn from_query(query: &DepartmentLookupQuery) -> Self {
        Self {
            school: query.school.as_deref().map(Lookup::parse),
            institution: query.institution.as_deref().map(Lookup::parse),
        }
    }
}

/// Create a new department within a school.
///
/// The school may be named, in which case `institution` narrows the name match. The
/// creator, head and secretary become admins of the department.
///
/// # Access Control
/// - `SchoolAdmin` - Caller must administer the parent school
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Unknown school, duplicate name or unknown user reference
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the school
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the school", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_department(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let resolver = Resolver::new(&state.db);

    let institution_id = match &payload.institution {
        Some(lookup) => Some(
            required(resolver.institution(lookup).await?, "Institution", lookup)?.id,
        ),
        None => None,
    };
    let school = required(
        resolver.school(&payload.school, institution_id).await?,
        "School",
        &payload.school,
    )?;

    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::SchoolAdmin(school.id)])
        .await?;

    let service = DepartmentService::new(&state.db);

    let params = CreateDepartmentParams::from_dto(payload, school.id, user.id);

    let department = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List departments, optionally narrowed by school and institution.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    params(DepartmentQuery),
    responses(
        (status = 200, description = "Successfully retrieved departments", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let school = query.school.as_deref().map(Lookup::parse);
    let institution = query.institution.as_deref().map(Lookup::parse);

    let departments = service
        .get_all(school.as_ref(), institution.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            departments
                .into_iter()
                .map(|d| d.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Successfully retrieved department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), &Ancestors::none()).await
}

/// Update a department.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the department
#[utoipa::path(
    patch,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_department(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), &Ancestors::none(), payload).await
}

/// Delete a department along with its courses and units.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the department
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Successfully deleted department"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_department(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), &Ancestors::none()).await
}

#[utoipa::path(
    get,
    path = "/api/departments/lookup",
    tag = DEPARTMENT_TAG,
    params(DepartmentLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved department", body = DepartmentDto),
        (status = 400, description = "Missing lookup parameters or ambiguous name", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_department(
    State(state): State<AppState>,
    Query(query): Query<DepartmentLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, &ancestors).await
}

#[utoipa::path(
    patch,
    path = "/api/departments/lookup",
    tag = DEPARTMENT_TAG,
    params(DepartmentLookupQuery),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 400, description = "Invalid department data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_department_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<DepartmentLookupQuery>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, &ancestors, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/departments/lookup",
    tag = DEPARTMENT_TAG,
    params(DepartmentLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted department"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_department_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<DepartmentLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, &ancestors).await
}

async fn find_id(
    service: &DepartmentService<'_>,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<i32, AppError> {
    service
        .find_id(
            target,
            ancestors.school.as_ref(),
            ancestors.institution.as_ref(),
        )
        .await?
        .ok_or_else(|| AppError::not_found("Department"))
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let id = find_id(&service, target, ancestors).await?;

    match service.get_by_id(id).await? {
        Some(department) => Ok((StatusCode::OK, Json(department.into_dto()))),
        None => Err(AppError::not_found("Department")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
    payload: UpdateDepartmentDto,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let id = find_id(&service, target, ancestors).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::DepartmentAdmin(id)])
        .await?;

    match service
        .update(id, UpdateDepartmentParams::from(payload))
        .await?
    {
        Some(department) => Ok((StatusCode::OK, Json(department.into_dto()))),
        None => Err(AppError::not_found("Department")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let id = find_id(&service, target, ancestors).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::DepartmentAdmin(id)])
        .await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Department"))
    }
}
