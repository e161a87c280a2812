//! Server-rendered board pages
//!
//! Same verbs as the JSON API. Reads bind data into a named view; writes
//! redirect back to the list. Forms reach PUT and DELETE through the hidden
//! `_method` field (see `http::method_override`).

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Router,
};

use crate::http::extractors::PostIdParam;
use crate::http::server::AppState;
use crate::http::views::{self, PageError, ViewModel, ViewReply};
use crate::models::PostDraft;

type PageResult = Result<ViewReply, PageError>;

/// GET / - landing page
async fn index() -> ViewReply {
    ViewModel::new(views::INDEX).into()
}

/// GET /board - list page
async fn list_page(State(state): State<Arc<AppState>>) -> PageResult {
    let posts = state.service.list().await?;
    Ok(ViewModel::new(views::LIST).with("posts", &posts).into())
}

/// GET /board/{id} - detail page with the edit form
async fn detail_page(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam<PageError>,
) -> PageResult {
    let post = state.service.detail(id).await?;
    Ok(ViewModel::new(views::DETAIL).with("post", &post).into())
}

/// GET /board/write - empty write form
async fn write_form() -> ViewReply {
    ViewModel::new(views::WRITE).into()
}

/// POST /board/write - form submit
async fn write_submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<PostDraft>, FormRejection>,
) -> PageResult {
    let Form(draft) = form?;
    state.service.insert(draft).await?;
    Ok(ViewReply::redirect_to_list())
}

/// PUT /board/{id}
async fn update_submit(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam<PageError>,
    form: Result<Form<PostDraft>, FormRejection>,
) -> PageResult {
    let Form(draft) = form?;
    state.service.update(id, draft).await?;
    Ok(ViewReply::redirect_to_list())
}

/// DELETE /board/{id}
async fn delete_submit(
    State(state): State<Arc<AppState>>,
    PostIdParam(id, _): PostIdParam<PageError>,
) -> PageResult {
    state.service.delete(id).await?;
    Ok(ViewReply::redirect_to_list())
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/board", get(list_page))
        .route("/board/write", get(write_form).post(write_submit))
        .route(
            "/board/{id}",
            get(detail_page).put(update_submit).delete(delete_submit),
        )
}
