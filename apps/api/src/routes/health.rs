use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message the frontend checks on startup.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Review Backend is Running!"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-review-api"
    }))
}
