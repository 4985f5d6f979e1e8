/*
 * Responsibility
 * - courses CRUD (+ author name join for listings)
 * - create course together with its categories / modules in one transaction
 * - enrollments (user ↔ course)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub content: String,
    pub video: Option<String>,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewCourse<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub image: Option<&'a str>,
    pub video: Option<&'a str>,
    pub categories: &'a [String],
    pub modules: &'a [String],
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<CourseRow>> {
    let rows = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT
            c.id, c.title, c.image, c.content, c.video, c.author_id,
            u.full_name AS author_name, c.created_at
        FROM courses c
        JOIN users u ON u.id = c.author_id
        ORDER BY c.id DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, course_id: i64) -> RepoResult<Option<CourseRow>> {
    let row = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT
            c.id, c.title, c.image, c.content, c.video, c.author_id,
            u.full_name AS author_name, c.created_at
        FROM courses c
        JOIN users u ON u.id = c.author_id
        WHERE c.id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Author of a course, if the course exists.
pub async fn author_of(db: &PgPool, course_id: i64) -> RepoResult<Option<i64>> {
    let author_id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT author_id
        FROM courses
        WHERE id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(db)
    .await?;

    Ok(author_id)
}

pub async fn create(db: &PgPool, author_id: i64, course: &NewCourse<'_>) -> RepoResult<i64> {
    let mut tx = db.begin().await?;

    let course_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO courses (title, image, content, video, author_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(course.title)
    .bind(course.image)
    .bind(course.content)
    .bind(course.video)
    .bind(author_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(RepoError::from_sqlx)?;

    for name in course.categories {
        sqlx::query(
            r#"
            INSERT INTO course_categories (name, course_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(name)
        .bind(course_id)
        .execute(&mut *tx)
        .await?;
    }

    for name in course.modules {
        sqlx::query(
            r#"
            INSERT INTO course_modules (name, course_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(name)
        .bind(course_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(course_id)
}

pub async fn update(
    db: &PgPool,
    course_id: i64,
    title: Option<&str>,
    content: Option<&str>,
    image: Option<&str>,
    video: Option<&str>,
) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE courses
        SET
            title = COALESCE($2, title),
            content = COALESCE($3, content),
            image = COALESCE($4, image),
            video = COALESCE($5, video)
        WHERE id = $1
        "#,
    )
    .bind(course_id)
    .bind(title)
    .bind(content)
    .bind(image)
    .bind(video)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn set_video(db: &PgPool, course_id: i64, path: &str) -> RepoResult<bool> {
    update(db, course_id, None, None, None, Some(path)).await
}

pub async fn delete(db: &PgPool, course_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM courses
        WHERE id = $1
        "#,
    )
    .bind(course_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns false when the user was already enrolled.
pub async fn enroll(db: &PgPool, user_id: i64, course_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO enrollments (user_id, course_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, course_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(course_id)
    .execute(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(result.rows_affected() > 0)
}
