use axum::extract::{FromRequestParts, Path, rejection::PathRejection};
use axum::http::request::Parts;

use crate::error::AppError;

/// `axum::extract::Path` whose rejection is an `AppError`, so an unparsable
/// id answers 400 with the `{"error": "..."}` shape.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
