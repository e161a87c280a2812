//! Board service - the single entry point both adapters call
//!
//! Validates ids and drafts, then delegates to the configured [`PostStore`].

use std::sync::Arc;

use crate::db::repos::PostStore;
use crate::error::BoardResult;
use crate::models::{Post, PostDraft, PostId};

/// Post operations shared by the JSON and page adapters
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn PostStore>,
}

impl BoardService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// All posts, in the store's configured order.
    pub async fn list(&self) -> BoardResult<Vec<Post>> {
        let posts = self.store.list().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Fetch one post, counting the read.
    ///
    /// The counter is bumped before the fetch, so the returned post already
    /// includes this view. The two store calls are not atomic.
    pub async fn detail(&self, id: i64) -> BoardResult<Post> {
        let id = PostId::new(id)?;
        self.store.record_view(id).await?;
        let post = self.store.get(id).await?;
        tracing::debug!(%id, views = post.view_count, "Fetched post");
        Ok(post)
    }

    /// Validate and store a new post, returning its id.
    pub async fn insert(&self, draft: PostDraft) -> BoardResult<i64> {
        let post = draft.validate()?;
        let id = self.store.insert(post).await?;
        tracing::info!(id, "Created post");
        Ok(id)
    }

    pub async fn update(&self, id: i64, draft: PostDraft) -> BoardResult<()> {
        let id = PostId::new(id)?;
        let post = draft.validate()?;
        self.store.update(id, post).await?;
        tracing::info!(%id, "Updated post");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> BoardResult<()> {
        let id = PostId::new(id)?;
        self.store.delete(id).await?;
        tracing::info!(%id, "Deleted post");
        Ok(())
    }
}
