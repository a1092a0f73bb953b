use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness plus a snapshot of the connection pool.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStats,
}

#[derive(Serialize)]
pub struct PoolStats {
    /// Connections currently open, idle or in use.
    pub size: u32,
    pub idle: usize,
    pub max: u32,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = customers_db::health_check(&state.pool).await.is_ok();

    let pool = PoolStats {
        size: state.pool.size(),
        idle: state.pool.num_idle(),
        max: state.pool.options().get_max_connections(),
    };
    if !db_healthy {
        tracing::warn!(size = pool.size, idle = pool.idle, "Database health check failed");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
