//! JSON board endpoints
//!
//! Reads return the post (or posts) as JSON; writes answer 200 with an empty
//! body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::PostIdParam;
use crate::http::server::AppState;
use crate::models::{Post, PostDraft};

/// GET /api/board - list all posts
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// GET /api/board/{id} - one post, counting the view
async fn get_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.service.detail(id).await?))
}

/// POST /api/board/write - create a post
async fn write_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PostDraft>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(draft) = body?;
    state.service.insert(draft).await?;
    Ok(StatusCode::OK)
}

/// PUT /api/board/{id} - replace a post's fields
async fn update_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam,
    body: Result<Json<PostDraft>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(draft) = body?;
    state.service.update(id, draft).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/board/{id}
async fn delete_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// JSON routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/board", get(list_posts))
        .route("/api/board/write", post(write_post))
        .route(
            "/api/board/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}
