//! Monitoring sync and visit history handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use shared::MonitoringSyncInput;

use crate::error::AppResult;
use crate::services::MonitoringService;
use crate::AppState;

/// Apply a monitoring batch (visit plus observation points)
pub async fn sync_monitoring(
    State(state): State<AppState>,
    Json(input): Json<MonitoringSyncInput>,
) -> impl IntoResponse {
    let service = MonitoringService::new(state.db.clone());

    match service.sync_monitoring(input).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Monitoring synchronized",
                "monitoring_id": outcome.monitoring_id,
                "points_count": outcome.points_count,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Visit history for a plot, newest first
pub async fn list_plot_monitorings(
    State(state): State<AppState>,
    Path(plot_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let service = MonitoringService::new(state.db.clone());
    let monitorings = service.monitorings_by_plot(plot_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "monitorings": monitorings,
    })))
}
