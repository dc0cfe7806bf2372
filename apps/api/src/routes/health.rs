use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and the configured export stages.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-export",
        "exportStages": state.exporter.stage_names(),
        "externalRenderer": state.config.fallback.url.is_some(),
    }))
}
