//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::UrlRecordRepository;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts registered records and clicks
/// 2. **Geo**: Reports the active locator
/// 3. **Logging**: Reports the active event logger
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "3 records, 12 clicks" },
///     "geo": { "status": "ok", "message": "Locator: http" },
///     "logging": { "status": "ok", "message": "Logger: tracing" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let geo_check = CheckStatus::ok(format!("Locator: {}", state.locator.name()));
    let logging_check = CheckStatus::ok(format!("Logger: {}", state.logger.name()));

    let all_healthy = store_check.is_ok() && geo_check.is_ok() && logging_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            geo: geo_check,
            logging: logging_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.store.count_records().await {
        Ok(records) => CheckStatus::ok(format!(
            "{} records, {} clicks",
            records,
            state.store.total_clicks()
        )),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}
