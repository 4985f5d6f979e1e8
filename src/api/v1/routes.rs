/*
 * Responsibility
 * - v1 URL layout
 * - public routes (health, auth, catalogue reads) merged with bearer-protected routes
 * - the same path may carry a public GET and protected writes; merge joins their method routers
 */
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{login, register},
    blog_posts::{create_blog_post, list_blog_posts},
    categories::{create_category, delete_category, list_categories, update_category},
    courses::{
        create_course, delete_course, enroll, get_course, list_courses, update_course,
        upload_video,
    },
    health::health,
    messages::{list_messages, send_message},
    modules::{create_module, delete_module, list_modules, update_module},
    profile::{get_profile, update_profile, upload_profile_image},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = middleware::auth::access::apply(protected_routes(&state), state);

    public_routes().merge(protected)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/courses", get(list_courses))
        .route("/courses/{course_id}", get(get_course))
        .route("/categories", get(list_categories))
        .route("/modules", get(list_modules))
        .route("/blog-posts", get(list_blog_posts))
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route(
            "/profile/image",
            post(upload_profile_image).layer(upload_limit),
        )
        .route("/messages", post(send_message))
        .route("/users/{user_id}/messages", get(list_messages))
        .route("/courses", post(create_course))
        .route(
            "/courses/{course_id}",
            put(update_course).delete(delete_course),
        )
        .route("/courses/{course_id}/enroll", post(enroll))
        .route(
            "/courses/{course_id}/video",
            post(upload_video).layer(upload_limit),
        )
        .route("/categories", post(create_category))
        .route(
            "/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
        .route("/modules", post(create_module))
        .route(
            "/modules/{module_id}",
            put(update_module).delete(delete_module),
        )
        .route("/blog-posts", post(create_blog_post))
}
