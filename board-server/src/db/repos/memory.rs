//! In-process post store
//!
//! Used by tests and by `board serve --in-memory`. Contents live as long as
//! the process does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ListOrder, PostStore, StoreError};
use crate::models::{NewPost, Post, PostId};

#[derive(Default)]
struct Inner {
    /// Last id handed out; ids are never reused
    last_id: i64,
    rows: BTreeMap<i64, Post>,
}

/// Memory-backed store
#[derive(Default)]
pub struct MemoryPostStore {
    inner: RwLock<Inner>,
    order: ListOrder,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: ListOrder) -> Self {
        Self {
            inner: RwLock::default(),
            order,
        }
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.read().await;
        let posts = inner.rows.values().cloned();
        Ok(match self.order {
            ListOrder::NewestFirst => posts.rev().collect(),
            ListOrder::OldestFirst => posts.collect(),
        })
    }

    async fn get(&self, id: PostId) -> Result<Post, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id.get())
            .cloned()
            .ok_or(StoreError::NotFound { id: id.get() })
    }

    async fn insert(&self, post: NewPost) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(
            id,
            Post {
                id,
                title: post.title,
                content: post.content,
                writer: post.writer,
                view_count: 0,
                created_at: Utc::now(),
                updated_at: None,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: PostId, post: NewPost) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id.get())
            .ok_or(StoreError::NotFound { id: id.get() })?;

        row.title = post.title;
        row.content = post.content;
        row.writer = post.writer;
        row.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or(StoreError::NotFound { id: id.get() })
    }

    async fn record_view(&self, id: PostId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id.get())
            .ok_or(StoreError::NotFound { id: id.get() })?;
        row.view_count += 1;
        Ok(())
    }
}
