use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{BulkCategoryNamesDto, BulkDeleteCategoriesDto, CategoryDto, CategoryNameDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a document category.
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Blank name or a category with that name already exists
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryNameDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CategoryNameDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    let category = service.create(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Create several categories at once. Nothing is created if any name is a duplicate.
#[utoipa::path(
    post,
    path = "/api/categories/bulk",
    tag = CATEGORY_TAG,
    request_body = BulkCategoryNamesDto,
    responses(
        (status = 201, description = "Successfully created categories", body = Vec<CategoryDto>),
        (status = 400, description = "Invalid or duplicate names", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn bulk_create_categories(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<BulkCategoryNamesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    let categories = service.bulk_create(&payload.names).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::not_found("Category")),
    }
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryNameDto,
    responses(
        (status = 200, description = "Successfully renamed category", body = CategoryDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    if service.get_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Category"));
    }

    AuthGuard::new(&state.db, &token).require(&[]).await?;

    match service.rename(id, &payload.name).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::not_found("Category")),
    }
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Category"))
    }
}

/// Delete a category by its name, ignoring case.
#[utoipa::path(
    delete,
    path = "/api/categories/by-name/{name}",
    tag = CATEGORY_TAG,
    params(("name" = String, Path, description = "Category name")),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_category_by_name(
    State(state): State<AppState>,
    token: BearerToken,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    if service.delete_by_name(&name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Category"))
    }
}

/// Delete every category whose name matches one of the given names, ignoring case.
///
/// # Returns
/// - `200 OK` - The deleted names and the requested names that matched nothing
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    delete,
    path = "/api/categories/bulk",
    tag = CATEGORY_TAG,
    request_body = BulkCategoryNamesDto,
    responses(
        (status = 200, description = "Bulk delete outcome", body = BulkDeleteCategoriesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn bulk_delete_categories(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<BulkCategoryNamesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    let result = service.bulk_delete(&payload.names).await?;

    Ok((
        StatusCode::OK,
        Json(BulkDeleteCategoriesDto {
            deleted: result.deleted,
            not_found: result.not_found,
        }),
    ))
}
