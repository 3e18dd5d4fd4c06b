use super::handlers;
use super::state::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::public::health))
        .route("/api/posts", get(handlers::public::list_posts))
        .route("/api/posts/:slug", get(handlers::public::get_post))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/slug", get(handlers::admin::slug_preview))
        .route("/api/admin/posts", post(handlers::admin::create_post))
        .route(
            "/api/admin/posts/:id",
            put(handlers::admin::update_post).delete(handlers::admin::delete_post),
        )
}
