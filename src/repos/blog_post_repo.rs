/*
 * Responsibility
 * - blog_posts create / list (newest first, with author name)
 */
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct BlogPostRow {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub category: String,
    pub time_read: i32,
    pub published_on: NaiveDate,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
}

pub async fn create(
    db: &PgPool,
    author_id: i64,
    title: &str,
    image: Option<&str>,
    category: &str,
    time_read: i32,
    content: &str,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO blog_posts (title, image, category, time_read, content, author_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(image)
    .bind(category)
    .bind(time_read)
    .bind(content)
    .bind(author_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(id)
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> RepoResult<Vec<BlogPostRow>> {
    let rows = sqlx::query_as::<_, BlogPostRow>(
        r#"
        SELECT
            p.id, p.title, p.image, p.category, p.time_read, p.published_on,
            p.content, p.author_id, u.full_name AS author_name
        FROM blog_posts p
        JOIN users u ON u.id = p.author_id
        ORDER BY p.published_on DESC, p.id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}
