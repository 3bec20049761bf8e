//! Monitoring visit models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pest-monitoring visit to a plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitoring {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub plot_id: Uuid,
    pub date: DateTime<Utc>,
    /// Crop name as it was at visit time; immutable once written
    pub crop_name: String,
    /// Plot name as it was at visit time; immutable once written
    pub plot_name: String,
    pub weather: Option<WeatherSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Weather conditions captured alongside a visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: Option<Decimal>,
    pub humidity_percent: Option<i32>,
    pub precipitation_mm: Option<Decimal>,
    pub wind_speed_kmh: Option<Decimal>,
    pub conditions: Option<String>,
}
