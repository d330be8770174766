//! Portfolio service
//!
//! Ownership-scoped CRUD over portfolio records. Every read or mutation of
//! a specific portfolio checks existence first (`NotFound`), then ownership
//! (`Forbidden`) via the ownership policy.

use crate::error::ApiError;
use crate::repositories::{PortfolioRecord, PortfolioRepository};
use crate::services::ownership::assert_owner;
use crypto_portfolio_shared::models::PortfolioType;
use crypto_portfolio_shared::types::PortfolioResponse;
use sqlx::PgPool;
use uuid::Uuid;

/// Portfolio service for business logic
pub struct PortfolioService;

impl PortfolioService {
    /// Get a single portfolio, enforcing ownership.
    pub async fn get(
        pool: &PgPool,
        portfolio_id: Uuid,
        user_id: Uuid,
    ) -> Result<PortfolioResponse, ApiError> {
        let portfolio = Self::find_owned(pool, portfolio_id, user_id).await?;
        to_response(portfolio)
    }

    /// List all portfolios owned by the user.
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<PortfolioResponse>, ApiError> {
        let records = PortfolioRepository::find_by_user(pool, user_id).await?;
        records.into_iter().map(to_response).collect()
    }

    /// Create a portfolio owned by the user.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        name: &str,
        kind: PortfolioType,
    ) -> Result<PortfolioResponse, ApiError> {
        let record =
            PortfolioRepository::create(pool, user_id, name, &kind.to_string()).await?;
        to_response(record)
    }

    /// Rename a portfolio, enforcing ownership.
    ///
    /// The row can vanish between the ownership check and the update; that
    /// still reads as `NotFound`, not an internal error.
    pub async fn update(
        pool: &PgPool,
        portfolio_id: Uuid,
        user_id: Uuid,
        name: &str,
    ) -> Result<PortfolioResponse, ApiError> {
        Self::find_owned(pool, portfolio_id, user_id).await?;

        let updated = PortfolioRepository::update_name(pool, portfolio_id, name)
            .await?
            .ok_or_else(|| ApiError::NotFound("Portfolio not found".to_string()))?;
        to_response(updated)
    }

    /// Delete a portfolio, enforcing ownership.
    pub async fn delete(pool: &PgPool, portfolio_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        Self::find_owned(pool, portfolio_id, user_id).await?;
        PortfolioRepository::delete(pool, portfolio_id).await?;
        Ok(())
    }

    /// Existence check, then ownership check, in that order.
    async fn find_owned(
        pool: &PgPool,
        portfolio_id: Uuid,
        user_id: Uuid,
    ) -> Result<PortfolioRecord, ApiError> {
        let portfolio = PortfolioRepository::find_by_id(pool, portfolio_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Portfolio not found".to_string()))?;

        assert_owner(user_id, &portfolio)?;
        Ok(portfolio)
    }
}

fn to_response(record: PortfolioRecord) -> Result<PortfolioResponse, ApiError> {
    let kind = record
        .kind
        .parse::<PortfolioType>()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Corrupt portfolio kind: {e}")))?;

    Ok(PortfolioResponse {
        id: record.id.to_string(),
        name: record.name,
        kind,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
