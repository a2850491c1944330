use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/projects", get(handlers::projects))
        .route("/blog", get(handlers::blog))
        .route("/resume", get(handlers::resume))
        .route("/contact", get(handlers::contact))
        .route("/admin", get(handlers::admin))
        .route("/api/auth", post(handlers::login))
        .route("/api/posts", get(handlers::list_posts).post(handlers::save_post))
        .route("/api/posts/:slug", delete(handlers::delete_post))
        .route("/api/blog", get(handlers::list_blog))
        .route("/api/github/activity", get(handlers::github_activity))
        .route("/api/github/contributions", get(handlers::github_contributions))
        .fallback(handlers::not_found)
        .with_state(state)
}
