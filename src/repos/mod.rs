pub mod blog_post_repo;
pub mod category_repo;
pub mod course_module_repo;
pub mod course_repo;
pub mod error;
pub mod message_repo;
pub mod profile_repo;
pub mod user_repo;
