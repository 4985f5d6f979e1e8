pub mod auth;
pub mod blog_posts;
pub mod categories;
pub mod courses;
pub mod health;
pub mod messages;
pub mod modules;
pub mod profile;
pub mod upload;
