/*
 * Responsibility
 * - /courses, /categories, /modules request/response DTO
 * - A course response carries its category / module names
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::category_repo::CategoryRow;
use crate::repos::course_module_repo::CourseModuleRow;
use crate::repos::course_repo::CourseRow;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub modules: Vec<String>,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        if blank(&self.title) || blank(&self.content) {
            return Err("title and content are required");
        }
        if self
            .categories
            .iter()
            .chain(self.modules.iter())
            .any(|name| name.trim().is_empty())
        {
            return Err("category and module names cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title cannot be empty");
        }
        if let Some(content) = &self.content
            && content.trim().is_empty()
        {
            return Err("content cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub content: String,
    pub video: Option<String>,
    /// Author's full name.
    pub author: String,
    pub date_created: DateTime<Utc>,
    pub categories: Vec<String>,
    pub modules: Vec<String>,
}

impl CourseResponse {
    /// `categories` / `modules` may hold rows of other courses; only this course's are kept.
    pub fn new(row: CourseRow, categories: &[CategoryRow], modules: &[CourseModuleRow]) -> Self {
        Self {
            categories: categories
                .iter()
                .filter(|c| c.course_id == row.id)
                .map(|c| c.name.clone())
                .collect(),
            modules: modules
                .iter()
                .filter(|m| m.course_id == row.id)
                .map(|m| m.name.clone())
                .collect(),
            id: row.id,
            title: row.title,
            image: row.image,
            content: row.content,
            video: row.video,
            author: row.author_name,
            date_created: row.created_at,
        }
    }
}

/// Body for both POST /categories and POST /modules.
#[derive(Debug, Deserialize)]
pub struct CreateCourseItemRequest {
    pub name: Option<String>,
    pub course_id: Option<i64>,
}

impl CreateCourseItemRequest {
    /// Returns `(name, course_id)`.
    pub fn validate(self) -> Result<(String, i64), &'static str> {
        match (self.name, self.course_id) {
            (Some(name), Some(course_id)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), course_id))
            }
            _ => Err("name and course_id are required"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateModuleRequest {
    pub name: Option<String>,
    pub course_id: Option<i64>,
}

pub fn validate_new_name(name: Option<&str>) -> Result<Option<String>, &'static str> {
    match name.map(str::trim) {
        Some("") => Err("name cannot be empty"),
        other => Ok(other.map(str::to_string)),
    }
}

#[derive(Debug, Serialize)]
pub struct CourseItemResponse {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
}

impl From<CategoryRow> for CourseItemResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            course_id: row.course_id,
        }
    }
}

impl From<CourseModuleRow> for CourseItemResponse {
    fn from(row: CourseModuleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            course_id: row.course_id,
        }
    }
}
