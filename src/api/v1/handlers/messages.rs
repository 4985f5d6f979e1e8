/*
 * Responsibility
 * - POST /messages (sender = caller)
 * - GET /users/{user_id}/messages (own mailbox only)
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::{
            CreatedResponse,
            messages::{MailboxResponse, MessageResponse, SendMessageRequest},
        },
        extractors::{AuthCtxExtractor, JsonBody, PathParam},
    },
    error::AppError,
    repos::{error::RepoError, message_repo, user_repo},
    state::AppState,
};

pub async fn send_message(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<SendMessageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let (recipient_id, content) = req.validate().map_err(AppError::bad_request)?;

    let row = match message_repo::create(&state.db, ctx.user_id, recipient_id, &content).await {
        Ok(row) => row,
        // A valid token can outlive its user, so either side may be dangling.
        Err(RepoError::MissingReference) => {
            let sender_exists = user_repo::exists(&state.db, ctx.user_id).await?;
            return Err(missing_party(sender_exists));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        message_id = row.id,
        sender_id = ctx.user_id,
        recipient_id,
        "message sent"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "message sent successfully",
            id: row.id,
        }),
    ))
}

pub async fn list_messages(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    PathParam(user_id): PathParam<i64>,
) -> Result<Json<MailboxResponse>, AppError> {
    if user_id != ctx.user_id {
        tracing::warn!(caller = ctx.user_id, user_id, "mailbox access denied");
        return Err(AppError::Forbidden);
    }

    let (sent, received) = tokio::try_join!(
        message_repo::list_sent(&state.db, user_id),
        message_repo::list_received(&state.db, user_id),
    )?;

    Ok(Json(MailboxResponse {
        sent_messages: sent.into_iter().map(MessageResponse::from).collect(),
        received_messages: received.into_iter().map(MessageResponse::from).collect(),
    }))
}

fn missing_party(sender_exists: bool) -> AppError {
    if sender_exists {
        AppError::not_found("recipient")
    } else {
        AppError::not_found("user")
    }
}
