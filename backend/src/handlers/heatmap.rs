//! Heatmap handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::infestation::ObservationQuery;
use crate::services::HeatmapService;
use crate::AppState;

/// Heatmap points for a plot
pub async fn get_plot_heatmap(
    State(state): State<AppState>,
    Path(plot_id): Path<Uuid>,
    Query(query): Query<ObservationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let service = HeatmapService::new(state.db.clone());
    let points = service.plot_heatmap(plot_id, query.date_range()).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "plot_id": plot_id,
        "points_count": points.len(),
        "points": points,
    })))
}
