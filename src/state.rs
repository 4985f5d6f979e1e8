/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - db: PgPool, auth: Authenticator, uploads: FileStore
 * - Clone is cheap (everything inside is Arc/Clone cheap)
 */
use std::sync::Arc;

use campus_auth::Authenticator;

use crate::services::storage::FileStore;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: Arc<Authenticator>,
    pub uploads: Arc<dyn FileStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        db: sqlx::PgPool,
        auth: Arc<Authenticator>,
        uploads: Arc<dyn FileStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            db,
            auth,
            uploads,
            max_upload_bytes,
        }
    }
}
