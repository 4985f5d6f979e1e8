/*
 * Responsibility
 * - /categories CRUD; writes require authorship of the owning course
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::{
            CreatedResponse, MessageResponse,
            courses::{
                CourseItemResponse, CreateCourseItemRequest, UpdateCategoryRequest,
                validate_new_name,
            },
        },
        extractors::{AuthCtxExtractor, JsonBody, PathParam},
        handlers::courses::require_author,
    },
    error::AppError,
    repos::category_repo,
    state::AppState,
};

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseItemResponse>>, AppError> {
    let rows = category_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(CourseItemResponse::from).collect()))
}

pub async fn create_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<CreateCourseItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let (name, course_id) = req.validate().map_err(AppError::bad_request)?;
    require_author(&state, course_id, ctx.user_id).await?;

    let row = category_repo::create(&state.db, &name, course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "category created successfully",
            id: row.id,
        }),
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(category_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateCategoryRequest>,
) -> Result<Json<CourseItemResponse>, AppError> {
    let name = validate_new_name(req.name.as_deref()).map_err(AppError::bad_request)?;

    let current = category_repo::get(&state.db, category_id)
        .await?
        .ok_or(AppError::not_found("category"))?;
    require_author(&state, current.course_id, ctx.user_id).await?;

    let row = category_repo::update(&state.db, category_id, name.as_deref())
        .await?
        .ok_or(AppError::not_found("category"))?;

    Ok(Json(row.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(category_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let current = category_repo::get(&state.db, category_id)
        .await?
        .ok_or(AppError::not_found("category"))?;
    require_author(&state, current.course_id, ctx.user_id).await?;

    if !category_repo::delete(&state.db, category_id).await? {
        return Err(AppError::not_found("category"));
    }

    Ok(Json(MessageResponse::new("category deleted successfully")))
}
