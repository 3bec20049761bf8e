//! Health and status probes

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::AppState;

/// Root endpoint
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": "Field Monitoring Sync API",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "timestamp": Utc::now(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}
