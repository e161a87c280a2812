//! PostgreSQL post store
//!
//! Every operation is a single statement against `board_posts`:
//! - insert: `RETURNING id` so the caller gets the assigned key
//! - update/delete/record_view: zero affected rows means the post is gone

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{ListOrder, PostStore, StoreError};
use crate::models::{NewPost, Post, PostId};

/// Post record from database
#[derive(Debug, Clone, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    writer: String,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            writer: r.writer,
            view_count: r.view_count,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const LIST_NEWEST_FIRST: &str = r#"
    SELECT id, title, content, writer, view_count, created_at, updated_at
    FROM board_posts
    ORDER BY id DESC
"#;

const LIST_OLDEST_FIRST: &str = r#"
    SELECT id, title, content, writer, view_count, created_at, updated_at
    FROM board_posts
    ORDER BY id ASC
"#;

/// Post store backed by a sqlx pool
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
    order: ListOrder,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_order(pool, ListOrder::default())
    }

    pub fn with_order(pool: PgPool, order: ListOrder) -> Self {
        Self { pool, order }
    }

    fn expect_row(affected: u64, id: PostId) -> Result<(), StoreError> {
        if affected == 0 {
            Err(StoreError::NotFound { id: id.get() })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let sql = match self.order {
            ListOrder::NewestFirst => LIST_NEWEST_FIRST,
            ListOrder::OldestFirst => LIST_OLDEST_FIRST,
        };

        let rows: Vec<PostRow> = sqlx::query_as(sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: PostId) -> Result<Post, StoreError> {
        let row: PostRow = sqlx::query_as(
            r#"
            SELECT id, title, content, writer, view_count, created_at, updated_at
            FROM board_posts
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id: id.get() })?;

        Ok(row.into())
    }

    async fn insert(&self, post: NewPost) -> Result<i64, StoreError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO board_posts (title, content, writer)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.writer)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: PostId, post: NewPost) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE board_posts
            SET title = $2, content = $3, writer = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.writer)
        .execute(&self.pool)
        .await?;

        Self::expect_row(result.rows_affected(), id)
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM board_posts WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Self::expect_row(result.rows_affected(), id)
    }

    async fn record_view(&self, id: PostId) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE board_posts SET view_count = view_count + 1 WHERE id = $1")
                .bind(id.get())
                .execute(&self.pool)
                .await?;

        Self::expect_row(result.rows_affected(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p board-server -- --ignored

    async fn store() -> PgPostStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgPostStore::new(pool)
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: "world".into(),
            writer: "alice".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get() {
        let store = store().await;
        let id = PostId::new(store.insert(new_post("hello")).await.unwrap()).unwrap();

        let post = store.get(id).await.unwrap();
        assert_eq!(post.title, "hello");
        assert_eq!(post.view_count, 0);
        assert!(post.updated_at.is_none());

        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_record_view() {
        let store = store().await;
        let id = PostId::new(store.insert(new_post("before")).await.unwrap()).unwrap();
        let created = store.get(id).await.unwrap().created_at;

        store.update(id, new_post("after")).await.unwrap();
        store.record_view(id).await.unwrap();

        let post = store.get(id).await.unwrap();
        assert_eq!(post.title, "after");
        assert_eq!(post.view_count, 1);
        assert_eq!(post.created_at, created);
        assert!(post.updated_at.is_some());

        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_twice_is_not_found() {
        let store = store().await;
        let id = PostId::new(store.insert(new_post("gone")).await.unwrap()).unwrap();

        store.delete(id).await.unwrap();
        assert!(matches!(
            store.delete(id).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(store.get(id).await, Err(StoreError::NotFound { .. })));
    }
}
