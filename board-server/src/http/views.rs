//! Server-rendered pages: template registry and view replies
//!
//! Page handlers never build responses themselves. They return a
//! [`ViewReply`], either a named template with its context or a redirect,
//! and the conversion to HTTP happens here.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use super::error::ApiError;
use crate::error::BoardError;
use crate::models::ValidationError;

pub const INDEX: &str = "board/index.html";
pub const LIST: &str = "board/list.html";
pub const DETAIL: &str = "board/detail.html";
pub const WRITE: &str = "board/write.html";
pub const ERROR: &str = "board/error.html";

/// Where every page write sends the browser afterwards
pub const LIST_PATH: &str = "/board";

/// Templates are compiled into the binary; `.html` names are auto-escaped.
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("layout.html", include_str!("../../templates/layout.html")),
        (INDEX, include_str!("../../templates/board/index.html")),
        (LIST, include_str!("../../templates/board/list.html")),
        (DETAIL, include_str!("../../templates/board/detail.html")),
        (WRITE, include_str!("../../templates/board/write.html")),
        (ERROR, include_str!("../../templates/board/error.html")),
    ])
    .expect("invalid board templates");
    tera
});

/// A template name plus the data bound into it
#[derive(Debug)]
pub struct ViewModel {
    pub view: &'static str,
    pub context: Context,
}

impl ViewModel {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            context: Context::new(),
        }
    }

    /// Bind a value under `key` for the template.
    pub fn with<T: serde::Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.context.insert(key, value);
        self
    }

    pub fn render(&self) -> Result<String, tera::Error> {
        TEMPLATES.render(self.view, &self.context)
    }
}

/// What a page handler asks the boundary to do
#[derive(Debug)]
pub enum ViewReply {
    Render(ViewModel),
    Redirect(String),
}

impl ViewReply {
    pub fn redirect_to_list() -> Self {
        Self::Redirect(LIST_PATH.to_string())
    }
}

impl From<ViewModel> for ViewReply {
    fn from(model: ViewModel) -> Self {
        Self::Render(model)
    }
}

impl IntoResponse for ViewReply {
    fn into_response(self) -> Response {
        match self {
            Self::Render(model) => render_with_status(StatusCode::OK, &model),
            Self::Redirect(target) => Redirect::to(&target).into_response(),
        }
    }
}

fn render_with_status(status: StatusCode, model: &ViewModel) -> Response {
    match model.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(view = model.view, "Template error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Page error: same status mapping as the JSON API, rendered as HTML
#[derive(Debug)]
pub struct PageError(pub BoardError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _) = ApiError::classify(&self.0);
        let model = ViewModel::new(ERROR)
            .with("status", &status.as_u16())
            .with("message", &ApiError::public_message(&self.0));

        render_with_status(status, &model)
    }
}

impl From<BoardError> for PageError {
    fn from(e: BoardError) -> Self {
        Self(e)
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        Self(BoardError::Validation(ValidationError::Malformed {
            reason: rejection.body_text(),
        }))
    }
}
