//! PostgreSQL implementation of website entry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewWebsiteEntry, WebsiteEntry};
use crate::domain::repositories::WebsiteRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const NAME_UNIQUE_CONSTRAINT: &str = "url_websites_name_key";

#[derive(sqlx::FromRow)]
struct WebsiteRow {
    id: i64,
    name: String,
    destination: String,
    owner_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<WebsiteRow> for WebsiteEntry {
    fn from(r: WebsiteRow) -> Self {
        WebsiteEntry::new(r.id, r.name, r.destination, r.owner_id, r.created_at)
    }
}

/// PostgreSQL repository for short-name entries.
///
/// Name uniqueness is enforced by the `url_websites_name_key` constraint, so
/// concurrent inserts of one name resolve to exactly one row.
pub struct PgWebsiteRepository {
    pool: Arc<PgPool>,
}

impl PgWebsiteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebsiteRepository for PgWebsiteRepository {
    async fn create(&self, new_entry: NewWebsiteEntry) -> Result<WebsiteEntry, AppError> {
        let row = sqlx::query_as::<_, WebsiteRow>(
            r#"
            INSERT INTO url_websites (name, destination, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, destination, owner_id, created_at
            "#,
        )
        .bind(&new_entry.name)
        .bind(&new_entry.destination)
        .bind(new_entry.owner_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, NAME_UNIQUE_CONSTRAINT) {
                AppError::DuplicateName {
                    name: new_entry.name.clone(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<WebsiteEntry>, AppError> {
        let row = sqlx::query_as::<_, WebsiteRow>(
            r#"
            SELECT id, name, destination, owner_id, created_at
            FROM url_websites
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<WebsiteEntry>, AppError> {
        let row = sqlx::query_as::<_, WebsiteRow>(
            r#"
            SELECT id, name, destination, owner_id, created_at
            FROM url_websites
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<WebsiteEntry>, AppError> {
        let rows = sqlx::query_as::<_, WebsiteRow>(
            r#"
            SELECT id, name, destination, owner_id, created_at
            FROM url_websites
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<WebsiteEntry>, AppError> {
        let rows = sqlx::query_as::<_, WebsiteRow>(
            r#"
            SELECT id, name, destination, owner_id, created_at
            FROM url_websites
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM url_websites WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
