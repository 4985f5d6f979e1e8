use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};

use crate::error::AppError;

/// `axum::Json` whose rejection is an `AppError`, so a broken body still
/// answers with the `{"error": "..."}` shape.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
