//! Hidden form method override
//!
//! HTML forms only send GET and POST. A form POST under `/board` carrying a
//! `_method=PUT` or `_method=DELETE` field is rewritten to that method before
//! routing, so page forms can reach the same verbs as the JSON API.
//!
//! This must wrap the whole `Router`: middleware added with `Router::layer`
//! runs after the route (and its method) has been chosen.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Largest form body buffered while looking for the override field
const MAX_FORM_BYTES: usize = 1024 * 1024;

/// The hidden form field
#[derive(Deserialize)]
struct Override {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Middleware fn for `axum::middleware::from_fn`.
pub async fn method_override(req: Request, next: Next) -> Response {
    if !is_candidate(&req) {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    if let Some(method) = overridden_method(&bytes) {
        tracing::debug!(path = %parts.uri.path(), %method, "Form method override");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_candidate(req: &Request) -> bool {
    let path = req.uri().path();
    let under_pages = path == "/board" || path.starts_with("/board/");

    let is_form = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    req.method() == Method::POST && under_pages && is_form
}

/// `_method` value from a url-encoded body, if it names PUT or DELETE.
fn overridden_method(body: &[u8]) -> Option<Method> {
    let value = serde_urlencoded::from_bytes::<Override>(body).ok()?.method?;

    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
