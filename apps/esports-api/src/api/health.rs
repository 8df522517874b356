//! Readiness endpoint

use axum::{extract::State, response::Response};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

/// Readiness check - pings MongoDB, `503` when it is unreachable or unconfigured
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let database: HealthCheckFuture = Box::pin(async move {
        let Some(db) = state.store.database() else {
            return Err("database not configured".to_string());
        };

        let status = check_health_detailed(db).await;
        tracing::debug!(
            healthy = status.healthy,
            response_time_ms = status.response_time_ms,
            "MongoDB ping"
        );
        if status.healthy {
            Ok(())
        } else {
            Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
        }
    });

    run_health_checks(vec![("database", database)]).await
}
