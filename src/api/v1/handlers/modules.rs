/*
 * Responsibility
 * - /modules CRUD; writes require authorship of the owning course
 * - Moving a module to another course also requires authorship of the target
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
                CourseItemResponse, CreateCourseItemRequest, UpdateModuleRequest,
                validate_new_name,
            },
        },
        extractors::{AuthCtxExtractor, JsonBody, PathParam},
        handlers::courses::require_author,
    },
    error::AppError,
    repos::course_module_repo,
    state::AppState,
};

pub async fn list_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseItemResponse>>, AppError> {
    let rows = course_module_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(CourseItemResponse::from).collect()))
}

pub async fn create_module(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<CreateCourseItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let (name, course_id) = req.validate().map_err(AppError::bad_request)?;
    require_author(&state, course_id, ctx.user_id).await?;

    let row = course_module_repo::create(&state.db, &name, course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "module created successfully",
            id: row.id,
        }),
    ))
}

pub async fn update_module(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(module_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateModuleRequest>,
) -> Result<Json<CourseItemResponse>, AppError> {
    let name = validate_new_name(req.name.as_deref()).map_err(AppError::bad_request)?;

    let current = course_module_repo::get(&state.db, module_id)
        .await?
        .ok_or(AppError::not_found("module"))?;
    require_author(&state, current.course_id, ctx.user_id).await?;

    if let Some(target) = req.course_id
        && target != current.course_id
    {
        require_author(&state, target, ctx.user_id).await?;
    }

    let row = course_module_repo::update(&state.db, module_id, name.as_deref(), req.course_id)
        .await?
        .ok_or(AppError::not_found("module"))?;

    Ok(Json(row.into()))
}

pub async fn delete_module(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(module_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let current = course_module_repo::get(&state.db, module_id)
        .await?
        .ok_or(AppError::not_found("module"))?;
    require_author(&state, current.course_id, ctx.user_id).await?;

    if !course_module_repo::delete(&state.db, module_id).await? {
        return Err(AppError::not_found("module"));
    }

    Ok(Json(MessageResponse::new("module deleted successfully")))
}
