use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        student::{
            CreateStudentDto, StudentDocumentDto, StudentDto, StudentLookupQuery, StudentQuery,
            UpdateStudentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            lookup::LookupTarget,
            student::{CreateStudentParams, StudentFilter, UpdateStudentParams},
        },
        service::{
            resolve::{required, Resolver},
            student::StudentService,
        },
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Register a student profile.
///
/// The profile belongs to the caller unless `user` names another account, in which
/// case the caller must administer the institution given in the request. Missing
/// placement levels are inferred from the most specific one given.
///
/// # Access Control
/// - `SelfOrInstitutionAdmin` - Caller is the profile's user or an admin of its institution
///
/// # Returns
/// - `201 Created` - The created profile
/// - `400 Bad Request` - Unknown references, existing profile or inconsistent placement
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Creating a profile for someone else without institution admin rights
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not create this profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_student(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateStudentDto>,
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

    let service = StudentService::new(&state.db);

    let student = service
        .create(CreateStudentParams {
            user_id,
            institution: payload.institution,
            school: payload.school,
            department: payload.department,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List students, optionally narrowed by institution, school and department.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentQuery),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let filter = StudentFilter {
        institution: query.institution.as_deref().map(Lookup::parse),
        school: query.school.as_deref().map(Lookup::parse),
        department: query.department.as_deref().map(Lookup::parse),
    };

    let students = service.get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(students.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), None).await
}

/// Update a student's placement.
///
/// # Access Control
/// - `SelfOrInstitutionAdmin` - Caller is the student or an admin of their institution
#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid placement", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this profile", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_student(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), None, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this profile", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_student(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), None).await
}

/// Get download links for every document the student has uploaded.
#[utoipa::path(
    get,
    path = "/api/students/{id}/documents",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Successfully retrieved student documents", body = Vec<StudentDocumentDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_documents(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    match service.documents(id, &state.app_url).await? {
        Some(documents) => Ok((
            StatusCode::OK,
            Json(
                documents
                    .into_iter()
                    .map(|d| d.into_dto())
                    .collect::<Vec<_>>(),
            ),
        )),
        None => Err(AppError::not_found("Student")),
    }
}

/// Get a student by id, or by username within an optional institution.
#[utoipa::path(
    get,
    path = "/api/students/lookup",
    tag = STUDENT_TAG,
    params(StudentLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_student(
    State(state): State<AppState>,
    Query(query): Query<StudentLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    get(&state, &target, institution.as_ref()).await
}

#[utoipa::path(
    patch,
    path = "/api/students/lookup",
    tag = STUDENT_TAG,
    params(StudentLookupQuery),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid placement or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this profile", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_student_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<StudentLookupQuery>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    update(&state, &token, &target, institution.as_ref(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/students/lookup",
    tag = STUDENT_TAG,
    params(StudentLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 400, description = "Missing lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not delete this profile", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_student_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<StudentLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.username, "username")?;

    delete(&state, &token, &target, institution.as_ref()).await
}

async fn find_id(
    service: &StudentService<'_>,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    service
        .find_id(target, institution)
        .await?
        .ok_or_else(|| AppError::not_found("Student"))
}

async fn authorize(
    state: &AppState,
    service: &StudentService<'_>,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    let id = find_id(service, target, institution).await?;

    let owner = service
        .get_owner(id)
        .await?
        .ok_or_else(|| AppError::not_found("Student"))?;

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
    let service = StudentService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    match service.get_by_id(id).await? {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::not_found("Student")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
    payload: UpdateStudentDto,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let id = authorize(state, &service, token, target, institution).await?;

    match service.update(id, UpdateStudentParams::from(payload)).await? {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::not_found("Student")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let id = authorize(state, &service, token, target, institution).await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Student"))
    }
}
