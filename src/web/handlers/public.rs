use crate::models::Post;
use crate::services::search::{reading_time, search_posts};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    search: String,
}

/// A list entry: the post plus its estimated reading time.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostSummary {
    #[serde(flatten)]
    post: Post,
    reading_time: usize,
}

fn not_found(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Not Found",
        "message": msg,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<serde_json::Value>> {
    let wpm = state.config.content.words_per_minute;
    let posts: Vec<PostSummary> = search_posts(state.store.load_all()?, &params.search)
        .into_iter()
        .map(|post| PostSummary {
            reading_time: reading_time(&post.content, wpm),
            post,
        })
        .collect();
    let total = posts.len();

    Ok(Json(serde_json::json!({
        "data": posts,
        "meta": { "total": total },
    })))
}

/// GET /api/posts/:slug
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    match state.store.find_by_slug(&slug)? {
        Some(post) => {
            let minutes = reading_time(&post.content, state.config.content.words_per_minute);
            Ok(Json(serde_json::json!({
                "data": post,
                "meta": { "readingTime": minutes },
            }))
            .into_response())
        }
        None => Ok(not_found("Post not found")),
    }
}
