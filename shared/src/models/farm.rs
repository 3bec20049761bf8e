//! Farm domain models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A farm registered by a mobile client
///
/// The id is generated on the client and stays stable across retransmits;
/// every sync is a full-field overwrite keyed by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub id: Uuid,
    pub name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub total_area: Option<Decimal>,
    pub plots_count: Option<i32>,
    pub cultures: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
