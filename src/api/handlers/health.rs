//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Snapshot readable (a missing file counts as an empty catalog)
/// - **503 Service Unavailable**: Snapshot unreadable or corrupt
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "snapshot": {
///       "status": "ok",
///       "message": "42 products"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let snapshot_check = check_snapshot(&state).await;

    let all_healthy = snapshot_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            snapshot: snapshot_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the snapshot can be read and parsed.
async fn check_snapshot(state: &AppState) -> CheckStatus {
    match state.product_service.snapshot_size().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} products", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Snapshot error: {}", e)),
        },
    }
}
