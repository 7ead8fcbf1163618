use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        course::{CourseDto, CourseLookupQuery, CourseQuery, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{course::CreateCourseParams, lookup::LookupTarget},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Ancestor filters narrowing a course name lookup.
#[derive(Default)]
struct Ancestors {
    department: Option<Lookup>,
    school: Option<Lookup>,
    institution: Option<Lookup>,
}

impl Ancestors {
    fn from_query(query: &CourseLookupQuery) -> Self {
        Self {
            department: query.department.as_deref().map(Lookup::parse),
            school: query.school.as_deref().map(Lookup::parse),
            institution: query.institution.as_deref().map(Lookup::parse),
        }
    }
}

/// Create a new course within a department.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the owning department
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - Blank name or unknown department
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin of the department
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_course(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let department_id = service
        .resolve_department(&payload.department, payload.school.as_ref())
        .await?;

    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::DepartmentAdmin(department_id)])
        .await?;

    let course = service
        .create(CreateCourseParams {
            name: payload.name,
            department_id,
            created_by: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(CourseQuery),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let department = query.department.as_deref().map(Lookup::parse);

    let courses = service.get_all(department.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(courses.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), &Ancestors::default()).await
}

/// Rename a course.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the owning department
#[utoipa::path(
    patch,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), &Ancestors::default(), payload).await
}

/// Delete a course along with its units.
///
/// # Access Control
/// - `DepartmentAdmin` - Caller must administer the owning department
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_course(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), &Ancestors::default()).await
}

/// Get a course by id, or by name narrowed by department, school and institution.
///
/// Course names are not unique, so a name matching several courses is a 400.
#[utoipa::path(
    get,
    path = "/api/courses/lookup",
    tag = COURSE_TAG,
    params(CourseLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 400, description = "Missing lookup parameters or ambiguous name", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_course(
    State(state): State<AppState>,
    Query(query): Query<CourseLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, &ancestors).await
}

#[utoipa::path(
    patch,
    path = "/api/courses/lookup",
    tag = COURSE_TAG,
    params(CourseLookupQuery),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Blank name or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_course_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<CourseLookupQuery>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, &ancestors, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/courses/lookup",
    tag = COURSE_TAG,
    params(CourseLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin of the department", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_course_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<CourseLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ancestors = Ancestors::from_query(&query);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, &ancestors).await
}

async fn find_id(
    service: &CourseService<'_>,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<i32, AppError> {
    service
        .find_id(
            target,
            ancestors.department.as_ref(),
            ancestors.school.as_ref(),
            ancestors.institution.as_ref(),
        )
        .await?
        .ok_or_else(|| AppError::not_found("Course"))
}

/// Resolves the course and checks the caller administers its department.
async fn authorize(
    state: &AppState,
    service: &CourseService<'_>,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<i32, AppError> {
    let id = find_id(service, target, ancestors).await?;

    let department_id = service
        .get_department_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Course"))?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::DepartmentAdmin(department_id)])
        .await?;

    Ok(id)
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let id = find_id(&service, target, ancestors).await?;

    match service.get_by_id(id).await? {
        Some(course) => Ok((StatusCode::OK, Json(course.into_dto()))),
        None => Err(AppError::not_found("Course")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
    payload: UpdateCourseDto,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let id = authorize(state, &service, token, target, ancestors).await?;

    match service.rename(id, payload.name).await? {
        Some(course) => Ok((StatusCode::OK, Json(course.into_dto()))),
        None => Err(AppError::not_found("Course")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    ancestors: &Ancestors,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let id = authorize(state, &service, token, target, ancestors).await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Course"))
    }
}
