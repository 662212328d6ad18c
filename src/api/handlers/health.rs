//! Health check endpoint.
//!
//! Checks the database pool directly, bypassing the service layer.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use axum::{Json, extract::State, http::StatusCode};
use diesel_async::RunQueryDsl;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Bound on the database check so a hung connection cannot stall the check.
const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "A dependency is unavailable", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = BTreeMap::from([("database".to_string(), check_database(&state).await)]);
    let response = HealthResponse::from_checks(&state.version, checks);

    let status = match response.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(response))
}

async fn check_database(state: &AppState) -> ComponentHealth {
    let start = Instant::now();

    let check = async {
        let mut conn = state
            .db_pool
            .get()
            .await
            .map_err(|e| format!("Connection failed: {}", e))?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|e| format!("Query failed: {}", e))
    };

    let outcome = match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, check).await {
        Ok(result) => result,
        Err(_) => Err("Timed out".to_string()),
    };
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(_) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: "Connected".to_string(),
            latency_ms,
        },
        Err(message) => {
            tracing::warn!(error = %message, latency_ms, "Database health check failed");
            ComponentHealth {
                status: HealthStatus::Unhealthy,
                message,
                latency_ms,
            }
        }
    }
}
