/*
 * Responsibility
 * - POST /auth/register: validate → Argon2 hash → user_repo::create
 * - POST /auth/login: credentials check → campus_auth::Authenticator::issue
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::{
            CreatedResponse,
            auth::{LoginRequest, RegisterRequest, TokenResponse},
        },
        extractors::JsonBody,
    },
    error::AppError,
    repos::{error::RepoError, user_repo},
    services::password,
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let input = req.validate().map_err(AppError::bad_request)?;

    let password_hash = password::hash_password(&input.password).map_err(|e| {
        tracing::error!(error = %e, "failed to hash password");
        AppError::Internal
    })?;

    let id = user_repo::create(&state.db, &input.full_name, &input.email, &password_hash)
        .await
        .map_err(|e| match e {
            RepoError::Conflict => {
                tracing::info!("registration rejected: email already exists");
                AppError::conflict("email already exists")
            }
            other => other.into(),
        })?;

    tracing::info!(user_id = id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "user registered successfully",
            id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let (email, password) = req.validate().map_err(AppError::bad_request)?;

    let Some(user) = user_repo::find_credentials_by_email(&state.db, &email).await? else {
        tracing::info!("login failed: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify_password(&password, &user.password_hash) {
        tracing::info!(user_id = user.id, "login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let credential = state.auth.issue(user.id)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(TokenResponse {
        token: credential.token,
        token_type: "Bearer",
        expires_at: credential.expires_at,
    }))
}
