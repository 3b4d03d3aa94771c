//! Health check endpoint

use axum::response::Json;
use serde_json::json;

/// GET /health - Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "module": "lyrical-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
