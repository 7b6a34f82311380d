use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{format_timestamp, parse_timestamp, DbConnection};
use crate::domain::models::Child;
use crate::storage::traits::ChildStorage;

/// Repository for child profiles
#[derive(Clone)]
pub struct ChildRepository {
    db: DbConnection,
}

impl ChildRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_child(row: &SqliteRow) -> Result<Child> {
        let age: i64 = row.try_get("age")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Child {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: u8::try_from(age).with_context(|| format!("Stored age out of range: {}", age))?,
            avatar_color: row.try_get("avatar_color")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl ChildStorage for ChildRepository {
    async fn store_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO children (id, name, age, avatar_color, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&child.id)
        .bind(&child.name)
        .bind(child.age as i64)
        .bind(&child.avatar_color)
        .bind(format_timestamp(&child.created_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age, avatar_color, created_at
            FROM children
            WHERE id = ?
            "#,
        )
        .bind(child_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_child).transpose()
    }

    async fn list_children(&self) -> Result<Vec<Child>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, avatar_color, created_at
            FROM children
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_child).collect()
    }
}
