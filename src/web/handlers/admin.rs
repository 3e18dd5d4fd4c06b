use crate::models::PostDraft;
use crate::services::editor;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SlugParams {
    #[serde(default)]
    title: String,
    slug: Option<String>,
    exclude: Option<String>,
}

/// GET /api/admin/slug
///
/// With only a title this is the new-post prefill; with `exclude` it previews
/// the slug an edit of that post would be saved under.
pub async fn slug_preview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SlugParams>,
) -> AppResult<Json<serde_json::Value>> {
    let requested = params.slug.as_deref().filter(|s| !s.trim().is_empty());
    if params.title.trim().is_empty() && requested.is_none() {
        return Ok(Json(serde_json::json!({ "data": { "slug": "" } })));
    }

    let slug = editor::preview_slug(
        state.store.as_ref(),
        &params.title,
        requested,
        params.exclude.as_deref(),
        &state.config,
    )?;

    Ok(Json(serde_json::json!({ "data": { "slug": slug } })))
}

/// POST /api/admin/posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<PostDraft>,
) -> AppResult<Response> {
    let post = editor::save_post(state.store.as_ref(), draft, None, &state.config)?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "data": post }))).into_response())
}

/// PUT /api/admin/posts/:id
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<PostDraft>,
) -> AppResult<Json<serde_json::Value>> {
    let post = editor::save_post(state.store.as_ref(), draft, Some(&id), &state.config)?;
    Ok(Json(serde_json::json!({ "data": post })))
}

/// DELETE /api/admin/posts/:id
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    editor::delete_post(state.store.as_ref(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
