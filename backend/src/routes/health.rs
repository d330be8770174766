//! Liveness and readiness probes
//!
//! `/health` and `/health/live` report on the process alone and never touch
//! a dependency. `/health/ready` additionally round-trips a query through
//! the Postgres pool, so an orchestrator holds traffic until the database
//! is actually reachable.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProbeReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl ProbeReport {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<ProbeReport> {
    Json(ProbeReport::new("healthy"))
}

/// GET /health/live
pub async fn liveness_check() -> Json<ProbeReport> {
    Json(ProbeReport::new("alive"))
}

/// GET /health/ready
///
/// Returns 503 with the database error string until the pool answers.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ProbeReport>, (StatusCode, Json<ProbeReport>)> {
    match db::ping(state.db()).await {
        Ok(()) => {
            let mut report = ProbeReport::new("ready");
            report.database = Some("ok".to_string());
            Ok(Json(report))
        }
        Err(e) => {
            let mut report = ProbeReport::new("not_ready");
            report.database = Some(e.to_string());
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(report)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_package_version() {
        let Json(report) = health_check().await;
        assert_eq!(report.status, "healthy");
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
        assert!(report.database.is_none());
    }

    #[tokio::test]
    async fn test_liveness_never_inspects_dependencies() {
        let Json(report) = liveness_check().await;
        assert_eq!(report.status, "alive");
        assert!(report.database.is_none());
    }
}
