//! Sync payloads submitted by mobile clients
//!
//! Clients batch offline edits and may retransmit a batch after a timeout
//! without knowing whether the first attempt landed, so every payload is
//! applied as an idempotent upsert keyed by entity id.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WeatherSnapshot;
use crate::types::GpsCoordinates;

/// Farm batch: one farm plus its plots, applied atomically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSyncInput {
    pub farm: FarmInput,
    #[serde(default)]
    pub plots: Vec<PlotInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmInput {
    pub id: Uuid,
    pub name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub total_area: Option<Decimal>,
    pub plots_count: Option<i32>,
    #[serde(default)]
    pub cultures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotInput {
    pub id: Uuid,
    pub name: String,
    pub area: Option<Decimal>,
    #[serde(default)]
    pub polygon: Vec<GpsCoordinates>,
    pub culture_id: Option<Uuid>,
    pub culture_name: Option<String>,
}

/// Monitoring batch: one visit plus its observation points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSyncInput {
    pub monitoring: MonitoringInput,
    #[serde(default)]
    pub points: Vec<InfestationPointInput>,
}

/// Farm and plot ids are optional at the wire level so their absence can
/// be rejected as a validation outcome instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringInput {
    pub id: Uuid,
    pub farm_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub crop_name: String,
    pub plot_name: String,
    pub weather: Option<WeatherSnapshot>,
}

/// Observation batch keyed by an existing monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfestationSyncInput {
    pub monitoring_id: Option<Uuid>,
    #[serde(default)]
    pub points: Vec<InfestationPointInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfestationPointInput {
    /// Generated server-side when the client omits it
    pub id: Option<Uuid>,
    pub organism_id: Option<Uuid>,
    pub organism_name: String,
    pub severity: Decimal,
    pub quantity: i32,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub date: DateTime<Utc>,
}

/// Reporting period declared by the client
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Agronomic report payload; the report id is generated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSyncInput {
    pub farm_id: Option<Uuid>,
    pub plot_id: Option<Uuid>,
    pub report_type: Option<String>,
    pub period: Option<ReportPeriod>,
    pub monitoring_data: Option<serde_json::Value>,
    pub infestation_analysis: Option<serde_json::Value>,
    pub heatmap_data: Option<serde_json::Value>,
    pub summary: Option<serde_json::Value>,
}
