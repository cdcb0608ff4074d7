//! Liveness endpoint for orchestrators and the polling client.
//!
//! Always answers 200; a failed `SELECT 1` only flips the body to
//! `"degraded"` so the process is not restarted for a database blip.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match starwars_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    Json(HealthStatus {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Mounts `GET /health`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
