//! Route definitions for the Field Monitoring Sync Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Client synchronization
        .nest("/sync", sync_routes())
        // Farm reads
        .nest("/farms", farm_routes())
        // Plot reads
        .nest("/plots", plot_routes())
}

/// Synchronization routes consumed by mobile clients
fn sync_routes() -> Router<AppState> {
    Router::new()
        .route("/farm", post(handlers::sync_farm))
        .route("/monitoring", post(handlers::sync_monitoring))
        .route("/infestation", post(handlers::sync_infestation))
        .route("/agronomic-report", post(handlers::sync_agronomic_report))
        .route("/status/:farm_id", get(handlers::get_sync_status))
}

/// Farm-scoped read routes
fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/:farm_id", get(handlers::get_farm))
        .route("/:farm_id/reports", get(handlers::list_farm_reports))
        .route("/:farm_id/dashboard", get(handlers::get_farm_dashboard))
}

/// Plot-scoped read routes
fn plot_routes() -> Router<AppState> {
    Router::new()
        .route("/:plot_id/monitorings", get(handlers::list_plot_monitorings))
        .route("/:plot_id/infestation", get(handlers::list_plot_infestation))
        .route("/:plot_id/heatmap", get(handlers::get_plot_heatmap))
}
