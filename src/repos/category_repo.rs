/*
 * Responsibility
 * - course_categories CRUD
 * - bulk lookup by course ids for course listings
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<CategoryRow>> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, course_id
        FROM course_categories
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_for_courses(db: &PgPool, course_ids: &[i64]) -> RepoResult<Vec<CategoryRow>> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, course_id
        FROM course_categories
        WHERE course_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(course_ids)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, category_id: i64) -> RepoResult<Option<CategoryRow>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, course_id
        FROM course_categories
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(db: &PgPool, name: &str, course_id: i64) -> RepoResult<CategoryRow> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        INSERT INTO course_categories (name, course_id)
        VALUES ($1, $2)
        RETURNING id, name, course_id
        "#,
    )
    .bind(name)
    .bind(course_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    category_id: i64,
    name: Option<&str>,
) -> RepoResult<Option<CategoryRow>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        UPDATE course_categories
        SET name = COALESCE($2, name)
        WHERE id = $1
        RETURNING id, name, course_id
        "#,
    )
    .bind(category_id)
    .bind(name)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, category_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM course_categories
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
