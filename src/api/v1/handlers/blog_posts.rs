/*
 * Responsibility
 * - POST /blog-posts (author = caller, date = today)
 * - GET /blog-posts (public, newest first)
 */
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    api::v1::{
        dto::{
            CreatedResponse,
            blog_posts::{BlogPostResponse, CreateBlogPostRequest},
        },
        extractors::{AuthCtxExtractor, JsonBody},
    },
    error::AppError,
    repos::blog_post_repo,
    state::AppState,
};

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

#[derive(Debug, Default, Deserialize)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<BlogPostResponse>>, AppError> {
    let limit = page.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = page.offset.unwrap_or(0).max(0);

    let rows = blog_post_repo::list(&state.db, limit, offset).await?;

    Ok(Json(rows.into_iter().map(BlogPostResponse::from).collect()))
}

pub async fn create_blog_post(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let id = blog_post_repo::create(
        &state.db,
        ctx.user_id,
        req.title.as_deref().unwrap_or_default().trim(),
        req.image.as_deref(),
        req.category.as_deref().unwrap_or_default().trim(),
        req.time_read.unwrap_or_default(),
        req.content.as_deref().unwrap_or_default(),
    )
    .await?;

    tracing::info!(post_id = id, author_id = ctx.user_id, "blog post created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "blog post created successfully",
            id,
        }),
    ))
}
