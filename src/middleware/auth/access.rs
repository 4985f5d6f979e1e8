//! Bearer token check → put AuthCtx into request extensions.
//!
//! - `Authorization: Bearer <jwt>` is handed to `campus_auth::Authenticator`
//! - any rejection becomes a 401 (`AppError::Unauthorized`); the reason is only logged
//! - the token's `user_id` must be an integer user id

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};
use campus_auth::Rejection;

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Require a valid bearer token on every route of `router`.
///
/// Uses `route_layer` so unknown paths still answer 404 instead of 401.
///
/// ```ignore
/// let protected = middleware::auth::access::apply(protected_routes(), state.clone());
/// let v1 = public_routes().merge(protected);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take the State extractor, so pass state via from_fn_with_state
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = authenticate_request(&state, &req).map_err(|rejection| {
        tracing::warn!(
            reason = rejection.reason(),
            method = %req.method(),
            path = %req.uri().path(),
            "bearer authentication failed"
        );
        AppError::Unauthorized(rejection)
    })?;

    // middleware → extractor
    req.extensions_mut().insert(AuthCtx::new(user_id));

    Ok(next.run(req).await)
}

fn authenticate_request(state: &AppState, req: &Request<Body>) -> Result<i64, Rejection> {
    let header_value = match req.headers().get(header::AUTHORIZATION) {
        Some(v) => Some(v.to_str().map_err(|_| Rejection::Malformed)?),
        None => None,
    };

    let subject = state.auth.authenticate(header_value).into_result()?;

    subject.as_i64().ok_or(Rejection::Malformed)
}
