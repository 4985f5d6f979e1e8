use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::AppError;
use crate::services::storage::FileStore;

pub const FILE_FIELD: &str = "file";

/// Pull the `file` part out of a multipart body as `(original file name, bytes)`.
pub async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::bad_request("no selected file"));
        }

        let bytes = field.bytes().await?;
        return Ok((file_name, bytes));
    }

    Err(AppError::bad_request("no file part"))
}

/// Delete a stored upload whose database row was never written.
pub async fn discard_upload(store: &dyn FileStore, path: &str) {
    if let Err(e) = store.remove(path).await {
        tracing::warn!(error = %e, %path, "failed to discard orphaned upload");
    }
}
