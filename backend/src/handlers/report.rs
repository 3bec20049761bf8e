//! Agronomic report handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use shared::ReportSyncInput;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::AppState;

/// Store a new agronomic report snapshot
pub async fn sync_agronomic_report(
    State(state): State<AppState>,
    Json(input): Json<ReportSyncInput>,
) -> impl IntoResponse {
    let service = ReportService::new(state.db.clone());

    match service.create_report(input).await {
        Ok(report_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Agronomic report stored",
                "report_id": report_id,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Reports for a farm, newest first
pub async fn list_farm_reports(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let service = ReportService::new(state.db.clone());
    let reports = service.reports_by_farm(farm_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "reports": reports,
    })))
}
