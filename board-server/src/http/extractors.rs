//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::IntoResponse;

use super::error::ApiError;
use crate::error::BoardError;

/// Extract the `{id}` path segment as an integer.
///
/// Only parsing happens here; the service decides whether the value is a
/// usable id. `R` picks how a rejection is rendered (JSON by default, or an
/// HTML page for the view routes).
/// Both fields are public so handlers can bind `PostIdParam(id, _)`.
pub struct PostIdParam<R = ApiError>(pub i64, pub PhantomData<fn() -> R>);

impl<R> PostIdParam<R> {
    pub fn new(id: i64) -> Self {
        Self(id, PhantomData)
    }
}

impl<S, R> FromRequestParts<S> for PostIdParam<R>
where
    S: Send + Sync,
    R: From<BoardError> + IntoResponse,
{
    type Rejection = R;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                R::from(BoardError::InvalidArgument {
                    value: String::new(),
                    reason: "missing id",
                })
            })?;

        let id = raw.parse::<i64>().map_err(|_| {
            R::from(BoardError::InvalidArgument {
                value: raw.clone(),
                reason: "not an integer",
            })
        })?;

        Ok(Self::new(id))
    }
}
