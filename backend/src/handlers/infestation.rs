//! Infestation sync and plot observation handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::{DateRange, InfestationSyncInput};

use crate::error::AppResult;
use crate::services::InfestationService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ObservationQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ObservationQuery {
    /// Parse the query strings into a date range, ignoring bad input
    pub fn date_range(self) -> DateRange {
        DateRange {
            start_date: self.start_date.and_then(|s| s.parse().ok()),
            end_date: self.end_date.and_then(|s| s.parse().ok()),
        }
    }
}

/// Apply an observation batch for an existing monitoring
pub async fn sync_infestation(
    State(state): State<AppState>,
    Json(input): Json<InfestationSyncInput>,
) -> impl IntoResponse {
    let service = InfestationService::new(state.db.clone());

    match service.sync_points(input).await {
        Ok(points_count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Infestation data synchronized",
                "points_count": points_count,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// List observations for a plot, newest first
pub async fn list_plot_infestation(
    State(state): State<AppState>,
    Path(plot_id): Path<Uuid>,
    Query(query): Query<ObservationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let service = InfestationService::new(state.db.clone());
    let observations = service
        .observations_by_plot(plot_id, query.date_range())
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "observations": observations,
    })))
}
