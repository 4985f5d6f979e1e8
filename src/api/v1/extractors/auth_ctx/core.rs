use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campus_auth::Rejection;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// Extractor for handlers that need the caller's AuthCtx.
/// Assumes the access middleware already inserted AuthCtx into request.extensions().
/// Missing context (route not behind the middleware) is a 401.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .copied()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized(Rejection::MissingToken))
    }
}
