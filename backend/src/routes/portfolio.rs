//! Portfolio API routes
//!
//! All endpoints require a valid access token; the [`AuthUser`] guard
//! rejects unauthenticated requests before any handler runs. Ownership of
//! individual portfolios is enforced in the service layer.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::PortfolioService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crypto_portfolio_shared::types::{
    CreatePortfolioRequest, MessageResponse, PortfolioResponse, UpdatePortfolioRequest,
};
use uuid::Uuid;

/// Create portfolio routes
pub fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_portfolios).post(create_portfolio))
        .route(
            "/:id",
            get(get_portfolio)
                .put(update_portfolio)
                .delete(delete_portfolio),
        )
}

/// GET /api/v1/portfolio - List the authenticated user's portfolios
async fn list_portfolios(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PortfolioResponse>>> {
    let portfolios = PortfolioService::list(state.db(), auth.user_id).await?;
    Ok(Json(portfolios))
}

/// GET /api/v1/portfolio/:id - Get one portfolio (owner only)
async fn get_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PortfolioResponse>> {
    let portfolio = PortfolioService::get(state.db(), id, auth.user_id).await?;
    Ok(Json(portfolio))
}

/// POST /api/v1/portfolio - Create a portfolio
async fn create_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePortfolioRequest>,
) -> ApiResult<(StatusCode, Json<PortfolioResponse>)> {
    req.validate().map_err(ApiError::Validation)?;
    let portfolio =
        PortfolioService::create(state.db(), auth.user_id, &req.name, req.kind).await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

/// PUT /api/v1/portfolio/:id - Rename a portfolio (owner only)
async fn update_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePortfolioRequest>,
) -> ApiResult<Json<PortfolioResponse>> {
    req.validate().map_err(ApiError::Validation)?;
    let portfolio = PortfolioService::update(state.db(), id, auth.user_id, &req.name).await?;
    Ok(Json(portfolio))
}

/// DELETE /api/v1/portfolio/:id - Delete a portfolio (owner only)
async fn delete_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    PortfolioService::delete(state.db(), id, auth.user_id).await?;
    Ok(Json(MessageResponse {
        message: "Portfolio deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    // Guard enforcement tests live in routes/portfolio_tests.rs;
    // ownership flows are in the integration suite
}
