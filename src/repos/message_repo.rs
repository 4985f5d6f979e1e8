/*
 * Responsibility
 * - messages table: send / list by sender / list by recipient
 * - recipient FK violation surfaces as RepoError::MissingReference
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

pub async fn create(
    db: &PgPool,
    sender_id: i64,
    recipient_id: i64,
    content: &str,
) -> RepoResult<MessageRow> {
    let row = sqlx::query_as::<_, MessageRow>(
        r#"
        INSERT INTO messages (sender_id, recipient_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, sender_id, recipient_id, content, sent_at
        "#,
    )
    .bind(sender_id)
    .bind(recipient_id)
    .bind(content)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn list_sent(db: &PgPool, user_id: i64) -> RepoResult<Vec<MessageRow>> {
    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, sender_id, recipient_id, content, sent_at
        FROM messages
        WHERE sender_id = $1
        ORDER BY sent_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_received(db: &PgPool, user_id: i64) -> RepoResult<Vec<MessageRow>> {
    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, sender_id, recipient_id, content, sent_at
        FROM messages
        WHERE recipient_id = $1
        ORDER BY sent_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}
