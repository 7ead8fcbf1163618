use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, Lookup},
        club::{ClubDto, ClubLookupQuery, ClubQuery, CreateClubDto, UpdateClubDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            club::{CreateClubParams, UpdateClubParams},
            lookup::LookupTarget,
        },
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club and society endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// Create a new club or society.
///
/// The caller becomes its creator, an admin and a member. Listed admins are always
/// added to the members as well.
///
/// # Returns
/// - `201 Created` - The created club
/// - `400 Bad Request` - Blank name, duplicate name within the institution or unknown reference
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Successfully created club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_club(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = ClubService::new(&state.db);

    let club = service
        .create(CreateClubParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = CLUB_TAG,
    params(ClubQuery),
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let institution = query.institution.as_deref().map(Lookup::parse);
    let clubs = service.get_all(institution.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Successfully retrieved club", body = ClubDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, &LookupTarget::Id(id), None).await
}

/// Update a club's profile, admins and members.
///
/// # Access Control
/// - `ClubAdmin` - Caller must be an admin of the club
#[utoipa::path(
    patch,
    path = "/api/clubs/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Successfully updated club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a club admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_club(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    update(&state, &token, &LookupTarget::Id(id), None, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Successfully deleted club"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a club admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_club(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, &token, &LookupTarget::Id(id), None).await
}

/// Join a club as the calling user.
///
/// # Returns
/// - `200 OK` - The club after joining
/// - `400 Bad Request` - Caller is already a member
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Club not found
#[utoipa::path(
    post,
    path = "/api/clubs/{id}/join",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Successfully joined club", body = ClubDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn join_club(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = ClubService::new(&state.db);

    match service.join(id, user.id).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(AppError::not_found("Club")),
    }
}

/// Leave a club as the calling user. Leaving also drops admin rights.
///
/// # Returns
/// - `200 OK` - The club after leaving
/// - `400 Bad Request` - Caller created the club or is not a member
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Club not found
#[utoipa::path(
    post,
    path = "/api/clubs/{id}/leave",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Successfully left club", body = ClubDto),
        (status = 400, description = "Creator or not a member", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn leave_club(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = ClubService::new(&state.db);

    match service.leave(id, user.id).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(AppError::not_found("Club")),
    }
}

/// Get a club by id, or by name within an optional institution.
#[utoipa::path(
    get,
    path = "/api/clubs/lookup",
    tag = CLUB_TAG,
    params(ClubLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved club", body = ClubDto),
        (status = 400, description = "Missing or ambiguous lookup parameters", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_club(
    State(state): State<AppState>,
    Query(query): Query<ClubLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    get(&state, &target, institution.as_ref()).await
}

#[utoipa::path(
    patch,
    path = "/api/clubs/lookup",
    tag = CLUB_TAG,
    params(ClubLookupQuery),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Successfully updated club", body = ClubDto),
        (status = 400, description = "Invalid club data or lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a club admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_club_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<ClubLookupQuery>,
    Json(payload): Json<UpdateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    update(&state, &token, &target, institution.as_ref(), payload).await
}

#[utoipa::path(
    delete,
    path = "/api/clubs/lookup",
    tag = CLUB_TAG,
    params(ClubLookupQuery),
    responses(
        (status = 204, description = "Successfully deleted club"),
        (status = 400, description = "Missing or ambiguous lookup parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a club admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_club_lookup(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<ClubLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let institution = query.institution.as_deref().map(Lookup::parse);
    let target = LookupTarget::from_query(query.id, query.name, "name")?;

    delete(&state, &token, &target, institution.as_ref()).await
}

async fn find_id(
    service: &ClubService<'_>,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<i32, AppError> {
    service
        .find_id(target, institution)
        .await?
        .ok_or_else(|| AppError::not_found("Club"))
}

async fn get(
    state: &AppState,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    match service.get_by_id(id).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(AppError::not_found("Club")),
    }
}

async fn update(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
    payload: UpdateClubDto,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::ClubAdmin(id)])
        .await?;

    match service.update(id, UpdateClubParams::from(payload)).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(AppError::not_found("Club")),
    }
}

async fn delete(
    state: &AppState,
    token: &BearerToken,
    target: &LookupTarget,
    institution: Option<&Lookup>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let id = find_id(&service, target, institution).await?;

    AuthGuard::new(&state.db, token)
        .require(&[Permission::ClubAdmin(id)])
        .await?;

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Club"))
    }
}
