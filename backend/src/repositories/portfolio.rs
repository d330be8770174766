//! Portfolio repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Portfolio record from database
///
/// `kind` holds the lowercase portfolio type (`wallet`, `exchange`,
/// `manual`); parsing into the shared enum happens at the service layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortfolioRecord {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Portfolio repository for database operations
pub struct PortfolioRepository;

impl PortfolioRepository {
    /// Create a portfolio owned by the given user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        name: &str,
        kind: &str,
    ) -> Result<PortfolioRecord, sqlx::Error> {
        sqlx::query_as::<_, PortfolioRecord>(
            r#"
            INSERT INTO portfolios (user_id, name, kind)
            VALUES ($1, $2, $3)
            RETURNING id, name, kind, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(kind)
        .fetch_one(pool)
        .await
    }

    /// Find portfolio by ID
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<PortfolioRecord>, sqlx::Error> {
        sqlx::query_as::<_, PortfolioRecord>(
            r#"
            SELECT id, name, kind, user_id, created_at, updated_at
            FROM portfolios
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List portfolios owned by a user, newest first
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<PortfolioRecord>, sqlx::Error> {
        sqlx::query_as::<_, PortfolioRecord>(
            r#"
            SELECT id, name, kind, user_id, created_at, updated_at
            FROM portfolios
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Rename a portfolio; `None` if the row no longer exists
    pub async fn update_name(
        pool: &PgPool,
        id: Uuid,
        name: &str,
    ) -> Result<Option<PortfolioRecord>, sqlx::Error> {
        sqlx::query_as::<_, PortfolioRecord>(
            r#"
            UPDATE portfolios
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, kind, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Delete a portfolio
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM portfolios
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
