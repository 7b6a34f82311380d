use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{format_timestamp, parse_timestamp, DbConnection};
use crate::domain::models::Completion;
use crate::storage::traits::CompletionStorage;

/// Repository for the append-only completion log
#[derive(Clone)]
pub struct CompletionRepository {
    db: DbConnection,
}

impl CompletionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_completion(row: &SqliteRow) -> Result<Completion> {
        let completed_at: String = row.try_get("completed_at")?;

        Ok(Completion {
            id: row.try_get("id")?,
            child_id: row.try_get("child_id")?,
            task_id: row.try_get("task_id")?,
            completed_at: parse_timestamp(&completed_at)?,
            notes: row.try_get("notes")?,
        })
    }
}

#[async_trait]
impl CompletionStorage for CompletionRepository {
    async fn store_completion(&self, completion: &Completion) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO child_progress (id, child_id, task_id, completed_at, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&completion.id)
        .bind(&completion.child_id)
        .bind(&completion.task_id)
        .bind(format_timestamp(&completion.completed_at))
        .bind(&completion.notes)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_completions(&self, child_id: &str) -> Result<Vec<Completion>> {
        let rows = sqlx::query(
            r#"
            SELECT id, child_id, task_id, completed_at, notes
            FROM child_progress
            WHERE child_id = ?
            ORDER BY completed_at ASC, rowid ASC
            "#,
        )
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_completion).collect()
    }
}
