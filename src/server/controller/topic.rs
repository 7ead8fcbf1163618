use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::topic::{CreateTopicParams, UpdateTopicParams},
        service::topic::TopicService,
        state::AppState,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Create a topic covering a page range of one or more documents.
///
/// # Returns
/// - `201 Created` - The created topic
/// - `400 Bad Request` - Blank name, invalid page range or unknown document
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = TOPIC_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Successfully created topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_topic(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = TopicService::new(&state.db);

    let topic = service.create(CreateTopicParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved topics", body = Vec<TopicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topics = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(topics.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(("id" = i32, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Successfully retrieved topic", body = TopicDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(topic) => Ok((StatusCode::OK, Json(topic.into_dto()))),
        None => Err(AppError::not_found("Topic")),
    }
}

#[utoipa::path(
    patch,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(("id" = i32, Path, description = "Topic ID")),
    request_body = UpdateTopicDto,
    responses(
        (status = 200, description = "Successfully updated topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_topic(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = TopicService::new(&state.db);

    match service.update(id, UpdateTopicParams::from(payload)).await? {
        Some(topic) => Ok((StatusCode::OK, Json(topic.into_dto()))),
        None => Err(AppError::not_found("Topic")),
    }
}

#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(("id" = i32, Path, description = "Topic ID")),
    responses(
        (status = 204, description = "Successfully deleted topic"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = TopicService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Topic"))
    }
}
