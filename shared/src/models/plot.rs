//! Plot domain models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GpsCoordinates;

/// A plot belonging to a farm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plot {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub name: String,
    pub area: Option<Decimal>,
    /// Ordered boundary vertices; empty when the client never drew one
    pub polygon: Vec<GpsCoordinates>,
    pub culture_id: Option<Uuid>,
    pub culture_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
