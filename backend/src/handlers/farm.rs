//! Farm sync and fetch handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use shared::FarmSyncInput;

use crate::error::AppResult;
use crate::services::FarmService;
use crate::AppState;

/// Apply a farm batch (farm plus plots)
pub async fn sync_farm(
    State(state): State<AppState>,
    Json(input): Json<FarmSyncInput>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.sync_farm(input).await {
        Ok(farm_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Farm synchronized",
                "farm_id": farm_id,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Fetch a farm with its plots
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.get_farm_with_plots(farm_id).await {
        Ok(result) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "farm": result.farm,
                "plots": result.plots,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Sync status for a farm
pub async fn get_sync_status(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let service = FarmService::new(state.db.clone());
    let status = service.sync_status(farm_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "status": status,
    })))
}
