use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::DevelopmentArea;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{format_timestamp, parse_timestamp, DbConnection};
use crate::domain::models::LearningTask;
use crate::storage::traits::TaskStorage;

const TASK_COLUMNS: &str = "id, title, description, min_age, max_age, time_estimate, \
                            development_area, reward_message, icon, created_at";

/// Repository for the task catalog
#[derive(Clone)]
pub struct TaskRepository {
    db: DbConnection,
}

impl TaskRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_task(row: &SqliteRow) -> Result<LearningTask> {
        let min_age: i64 = row.try_get("min_age")?;
        let max_age: i64 = row.try_get("max_age")?;
        let time_estimate: i64 = row.try_get("time_estimate")?;
        let area: String = row.try_get("development_area")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(LearningTask {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            min_age: u8::try_from(min_age).context("Stored min_age out of range")?,
            max_age: u8::try_from(max_age).context("Stored max_age out of range")?,
            time_estimate: u32::try_from(time_estimate).context("Stored time_estimate out of range")?,
            development_area: area.parse::<DevelopmentArea>()?,
            reward_message: row.try_get("reward_message")?,
            icon: row.try_get("icon")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl TaskStorage for TaskRepository {
    async fn store_tasks(&self, tasks: &[LearningTask]) -> Result<()> {
        let mut tx = self.db.pool().begin().await?;

        for task in tasks {
            sqlx::query(
                r#"
                INSERT INTO learning_tasks (id, title, description, min_age, max_age, time_estimate,
                                            development_area, reward_message, icon, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&task.id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.min_age as i64)
            .bind(task.max_age as i64)
            .bind(task.time_estimate as i64)
            .bind(task.development_area.as_str())
            .bind(&task.reward_message)
            .bind(&task.icon)
            .bind(format_timestamp(&task.created_at))
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to store task '{}'", task.title))?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_task(&self, task_id: &str) -> Result<Option<LearningTask>> {
        let row = sqlx::query(&format!("SELECT {} FROM learning_tasks WHERE id = ?", TASK_COLUMNS))
            .bind(task_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn list_tasks_for_age(&self, age: u8) -> Result<Vec<LearningTask>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM learning_tasks WHERE min_age <= ? AND max_age >= ? ORDER BY title ASC, rowid ASC",
            TASK_COLUMNS
        ))
        .bind(age as i64)
        .bind(age as i64)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn count_tasks(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM learning_tasks")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count as u64)
    }
}
