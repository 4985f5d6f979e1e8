/*
 * Responsibility
 * - /blog-posts request/response DTO
 */
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repos::blog_post_repo::BlogPostRow;

#[derive(Debug, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub time_read: Option<i32>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl CreateBlogPostRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        if blank(&self.title) || blank(&self.category) || blank(&self.content) {
            return Err("title, category and content are required");
        }
        match self.time_read {
            Some(minutes) if minutes > 0 => Ok(()),
            _ => Err("time_read must be a positive number of minutes"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub category: String,
    pub time_read: i32,
    pub date: NaiveDate,
    pub content: String,
    pub author: String,
}

impl From<BlogPostRow> for BlogPostResponse {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image: row.image,
            category: row.category,
            time_read: row.time_read,
            date: row.published_on,
            content: row.content,
            author: row.author_name,
        }
    }
}
