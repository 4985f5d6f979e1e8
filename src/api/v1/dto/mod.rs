pub mod auth;
pub mod blog_posts;
pub mod courses;
pub mod messages;
pub mod profile;

use serde::Serialize;

/// `{"message": "..."}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"message": "...", "id": <id>}` for newly created records.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}
