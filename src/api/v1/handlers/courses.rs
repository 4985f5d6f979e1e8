/*
 * Responsibility
 * - /courses CRUD, enrollment, course video upload
 * - Mutations are author-only (require_author); reads are public
 */
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::{
            CreatedResponse, MessageResponse,
            courses::{CourseResponse, CreateCourseRequest, UpdateCourseRequest},
        },
        extractors::{AuthCtxExtractor, JsonBody, PathParam},
        handlers::upload::{discard_upload, read_file_part},
    },
    error::AppError,
    repos::{
        category_repo, course_module_repo,
        course_repo::{self, NewCourse},
        user_repo,
    },
    services::storage::COURSE_VIDEOS,
    state::AppState,
};

/// 404 when the course is gone, 403 when `user_id` did not write it.
pub(crate) async fn require_author(
    state: &AppState,
    course_id: i64,
    user_id: i64,
) -> Result<(), AppError> {
    match course_repo::author_of(&state.db, course_id).await? {
        None => Err(AppError::not_found("course")),
        Some(author_id) if author_id == user_id => Ok(()),
        Some(author_id) => {
            tracing::warn!(course_id, author_id, user_id, "course mutation by non-author");
            Err(AppError::Forbidden)
        }
    }
}

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let rows = course_repo::list(&state.db).await?;
    let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();

    let (categories, modules) = tokio::try_join!(
        category_repo::list_for_courses(&state.db, &ids),
        course_module_repo::list_for_courses(&state.db, &ids),
    )?;

    let res = rows
        .into_iter()
        .map(|row| CourseResponse::new(row, &categories, &modules))
        .collect();

    Ok(Json(res))
}

pub async fn get_course(
    State(state): State<AppState>,
    PathParam(course_id): PathParam<i64>,
) -> Result<Json<CourseResponse>, AppError> {
    let row = course_repo::get(&state.db, course_id)
        .await?
        .ok_or(AppError::not_found("course"))?;

    let ids = [course_id];
    let (categories, modules) = tokio::try_join!(
        category_repo::list_for_courses(&state.db, &ids),
        course_module_repo::list_for_courses(&state.db, &ids),
    )?;

    Ok(Json(CourseResponse::new(row, &categories, &modules)))
}

pub async fn create_course(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let categories: Vec<String> = req.categories.iter().map(|c| c.trim().to_string()).collect();
    let modules: Vec<String> = req.modules.iter().map(|m| m.trim().to_string()).collect();

    let course = NewCourse {
        title: req.title.as_deref().unwrap_or_default().trim(),
        content: req.content.as_deref().unwrap_or_default(),
        image: req.image.as_deref(),
        video: req.video.as_deref(),
        categories: &categories,
        modules: &modules,
    };

    let id = course_repo::create(&state.db, ctx.user_id, &course).await?;
    tracing::info!(course_id = id, author_id = ctx.user_id, "course created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "course created successfully",
            id,
        }),
    ))
}

pub async fn update_course(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(course_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateCourseRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;
    require_author(&state, course_id, ctx.user_id).await?;

    let updated = course_repo::update(
        &state.db,
        course_id,
        req.title.as_deref().map(str::trim),
        req.content.as_deref(),
        req.image.as_deref(),
        req.video.as_deref(),
    )
    .await?;
    if !updated {
        return Err(AppError::not_found("course"));
    }

    Ok(Json(MessageResponse::new("course updated successfully")))
}

pub async fn delete_course(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(course_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    require_author(&state, course_id, ctx.user_id).await?;

    if !course_repo::delete(&state.db, course_id).await? {
        return Err(AppError::not_found("course"));
    }

    tracing::info!(course_id, "course deleted");
    Ok(Json(MessageResponse::new("course deleted successfully")))
}

pub async fn enroll(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(course_id): PathParam<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if course_repo::author_of(&state.db, course_id).await?.is_none() {
        return Err(AppError::not_found("course"));
    }
    if !user_repo::exists(&state.db, ctx.user_id).await? {
        return Err(AppError::not_found("user"));
    }

    let newly_enrolled = course_repo::enroll(&state.db, ctx.user_id, course_id).await?;
    tracing::info!(course_id, user_id = ctx.user_id, newly_enrolled, "enrollment");

    Ok(Json(MessageResponse::new(
        "enrolled in the course successfully",
    )))
}

pub async fn upload_video(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(course_id): PathParam<i64>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    require_author(&state, course_id, ctx.user_id).await?;

    let mut multipart = multipart?;
    let (file_name, bytes) = read_file_part(&mut multipart).await?;

    let path = state.uploads.save(COURSE_VIDEOS, &file_name, bytes).await?;
    match course_repo::set_video(&state.db, course_id, &path).await {
        Ok(true) => {}
        Ok(false) => {
            discard_upload(state.uploads.as_ref(), &path).await;
            return Err(AppError::not_found("course"));
        }
        Err(e) => {
            discard_upload(state.uploads.as_ref(), &path).await;
            return Err(e.into());
        }
    }

    tracing::info!(course_id, %path, "course video stored");
    Ok(Json(MessageResponse::new(
        "course video uploaded successfully",
    )))
}
