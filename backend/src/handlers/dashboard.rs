//! Dashboard handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// Dashboard summary for a farm
pub async fn get_farm_dashboard(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let service = DashboardService::new(state.db.clone());
    let dashboard = service.farm_dashboard(farm_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "dashboard": dashboard,
    })))
}
