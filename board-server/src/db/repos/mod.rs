//! Post store trait and implementations
//!
//! Each store follows these patterns:
//! - One statement per operation, no transaction spans calls
//! - Missing rows surface as `StoreError::NotFound`, never as an empty success
//! - Connections are borrowed per call and returned before the call completes

pub mod memory;
pub mod posts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{NewPost, Post, PostId};

pub use memory::MemoryPostStore;
pub use posts::PgPostStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: post '{id}'")]
    NotFound { id: i64 },
}

/// Ordering of `PostStore::list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// Descending id, most recent first
    #[default]
    NewestFirst,
    /// Ascending id
    OldestFirst,
}

/// Persistence boundary for posts (testable)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;

    /// All posts in the store's configured order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    async fn get(&self, id: PostId) -> Result<Post, StoreError>;

    /// Insert a post, returning the id the store assigned.
    async fn insert(&self, post: NewPost) -> Result<i64, StoreError>;

    /// Replace title, content and writer of an existing post.
    async fn update(&self, id: PostId, post: NewPost) -> Result<(), StoreError>;

    async fn delete(&self, id: PostId) -> Result<(), StoreError>;

    /// Bump the view counter by one.
    async fn record_view(&self, id: PostId) -> Result<(), StoreError>;
}
