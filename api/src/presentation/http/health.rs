use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthBody {
    /// `ok` or `degraded`
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
    pub database_latency_ms: u64,
}

/// Unauthenticated liveness check; `degraded` while the database is unreachable.
#[utoipa::path(get, path = "/api/health", tag = "Health",
    responses((status = 200, body = HealthBody)))]
pub async fn health(State(pool): State<PgPool>) -> Json<HealthBody> {
    let started = Instant::now();
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .inspect_err(|e| tracing::warn!(error = ?e, "health_db_unreachable"))
        .is_ok();
    let status = if database { "ok" } else { "degraded" };
    Json(HealthBody {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        database_latency_ms: started.elapsed().as_millis() as u64,
    })
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
