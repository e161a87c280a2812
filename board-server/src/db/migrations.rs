//! Schema setup for the posts table

use sqlx::PgPool;

/// Create the posts table and its index if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running board migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS board_posts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            writer TEXT NOT NULL,
            view_count BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_board_posts_created ON board_posts(created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Board migrations complete");
    Ok(())
}
