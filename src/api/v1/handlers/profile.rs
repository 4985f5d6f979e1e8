/*
 * Responsibility
 * - GET/PUT /profile for the authenticated caller
 * - POST /profile/image (multipart) → FileStore → users.profile_image
 */
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};

use crate::{
    api::v1::{
        dto::{
            MessageResponse,
            profile::{ProfileResponse, UpdateProfileRequest},
        },
        extractors::{AuthCtxExtractor, JsonBody},
        handlers::upload::{discard_upload, read_file_part},
    },
    error::AppError,
    repos::{
        profile_repo::{self, ProfileUpdate},
        user_repo,
    },
    services::storage::PROFILE_IMAGES,
    state::AppState,
};

pub async fn get_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = user_repo::get(&state.db, ctx.user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    let (location, education, work_experience, licenses) = tokio::try_join!(
        profile_repo::get_location(&state.db, ctx.user_id),
        profile_repo::list_education(&state.db, ctx.user_id),
        profile_repo::list_work_experience(&state.db, ctx.user_id),
        profile_repo::list_licenses(&state.db, ctx.user_id),
    )?;

    Ok(Json(ProfileResponse::new(
        user,
        location,
        education,
        work_experience,
        licenses,
    )))
}

pub async fn update_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let updated = profile_repo::update(&state.db, ctx.user_id, &ProfileUpdate::from(req)).await?;
    if !updated {
        return Err(AppError::not_found("user"));
    }

    tracing::info!(user_id = ctx.user_id, "profile updated");
    Ok(Json(MessageResponse::new("profile updated successfully")))
}

pub async fn upload_profile_image(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut multipart = multipart?;
    let (file_name, bytes) = read_file_part(&mut multipart).await?;

    let path = state.uploads.save(PROFILE_IMAGES, &file_name, bytes).await?;

    match user_repo::set_profile_image(&state.db, ctx.user_id, &path).await {
        Ok(true) => {}
        Ok(false) => {
            discard_upload(state.uploads.as_ref(), &path).await;
            return Err(AppError::not_found("user"));
        }
        Err(e) => {
            discard_upload(state.uploads.as_ref(), &path).await;
            return Err(e.into());
        }
    }

    tracing::info!(user_id = ctx.user_id, %path, "profile image stored");
    Ok(Json(MessageResponse::new("profile image uploaded successfully")))
}
