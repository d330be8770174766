//! Postgres pool construction and schema migrations

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// How long an acquire may wait on a saturated pool before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
/// Idle connections are closed after this much inactivity.
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
/// Connections are recycled after this lifetime regardless of use.
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Build the application pool.
///
/// Connections identify themselves to Postgres as `crypto-portfolio` and
/// are validated before being handed out.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(database_url)?.application_name("crypto-portfolio");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(2)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .test_before_acquire(true)
        .connect_with(options)
        .await?;

    info!(max_connections, "database pool ready");
    Ok(pool)
}

/// Apply any pending migrations from `backend/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("database schema up to date");
    Ok(())
}

/// Round-trip query used by the readiness probe.
pub async fn ping(pool: &PgPool) -> Result<()> {
    if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
        warn!("database ping failed: {}", e);
        return Err(e.into());
    }
    Ok(())
}
