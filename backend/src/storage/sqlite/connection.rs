use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

// The database URL used when no configuration overrides it
pub const DEFAULT_DATABASE_URL: &str = "sqlite:learning_tracker.db";

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and set up the schema
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives only as long as its connection, so it
        // gets exactly one that is never recycled.
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", url))?;

        Self::setup_schema(&pool).await?;
        info!("Database ready at {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Fresh in-memory database for tests
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS children (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL CHECK (age BETWEEN 0 AND 18),
                avatar_color TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Children are listed newest first
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_children_created_at
            ON children(created_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS learning_tasks (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                min_age INTEGER NOT NULL CHECK (min_age BETWEEN 0 AND 18),
                max_age INTEGER NOT NULL CHECK (max_age BETWEEN 0 AND 18),
                time_estimate INTEGER NOT NULL CHECK (time_estimate > 0),
                development_area TEXT NOT NULL,
                reward_message TEXT NOT NULL,
                icon TEXT NOT NULL,
                created_at TEXT NOT NULL,
                CHECK (min_age <= max_age)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_learning_tasks_ages
            ON learning_tasks(min_age, max_age);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS child_progress (
                id TEXT PRIMARY KEY,
                child_id TEXT NOT NULL,
                task_id TEXT NOT NULL,
                completed_at TEXT NOT NULL,
                notes TEXT,
                FOREIGN KEY (child_id) REFERENCES children (id),
                FOREIGN KEY (task_id) REFERENCES learning_tasks (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_child_progress_child_id
            ON child_progress(child_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
