/*
 * Responsibility
 * - /messages request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::message_repo::MessageRow;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: Option<i64>,
    pub content: Option<String>,
}

impl SendMessageRequest {
    /// Returns `(recipient_id, content)`.
    pub fn validate(self) -> Result<(i64, String), &'static str> {
        match (self.recipient_id, self.content) {
            (Some(recipient_id), Some(content)) if !content.trim().is_empty() => {
                Ok((recipient_id, content))
            }
            _ => Err("recipient_id and content are required"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub timestamp: DateTime<Utc>,
    pub content: String,
}

impl From<MessageRow> for MessageResponse {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            sender_id: row.sender_id,
            recipient_id: row.recipient_id,
            timestamp: row.sent_at,
            content: row.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MailboxResponse {
    pub sent_messages: Vec<MessageResponse>,
    pub received_messages: Vec<MessageResponse>,
}
