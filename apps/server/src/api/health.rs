use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness touches the pool so a wedged database shows up here and not
/// only on real traffic.
async fn readyz(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.pool.get() {
        Ok(_) => Ok(Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::error!(error = %e, "readiness probe failed to acquire a connection");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
