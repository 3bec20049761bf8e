//! Infestation heatmap aggregation
//!
//! Groups observations by exact coordinate equality and classifies the
//! averaged severity of each location into a display tier.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity tier derived from average severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Average severity >= 75
    Critical,
    /// 50 to just under 75
    High,
    /// 25 to just under 50
    Medium,
    /// Below 25
    Low,
}

impl SeverityTier {
    /// Display color used by map clients
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "#FF0000",
            SeverityTier::High => "#FF9800",
            SeverityTier::Medium => "#FFEB3B",
            SeverityTier::Low => "#4CAF50",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityTier::Critical => write!(f, "critical"),
            SeverityTier::High => write!(f, "high"),
            SeverityTier::Medium => write!(f, "medium"),
            SeverityTier::Low => write!(f, "low"),
        }
    }
}

/// Classify an average severity (0-100 scale) into its tier
///
/// Bands are evaluated top-down; lower bounds are inclusive.
pub fn classify_severity(average_severity: Decimal) -> SeverityTier {
    if average_severity >= Decimal::from(75) {
        SeverityTier::Critical
    } else if average_severity >= Decimal::from(50) {
        SeverityTier::High
    } else if average_severity >= Decimal::from(25) {
        SeverityTier::Medium
    } else {
        SeverityTier::Low
    }
}

/// Normalized display intensity: severity / 100, clamped to [0, 1]
pub fn severity_intensity(severity: Decimal) -> Decimal {
    (severity / Decimal::from(100)).clamp(Decimal::ZERO, Decimal::ONE)
}

/// One observation row feeding the heatmap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSample {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub severity: Decimal,
    pub organism_name: String,
}

/// An aggregated, geolocated infestation summary for one coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub average_severity: Decimal,
    pub occurrence_count: i64,
    pub intensity: Decimal,
    pub tier: SeverityTier,
    pub color: String,
    pub organisms: Vec<String>,
}

/// Aggregate observations into heatmap points
///
/// Observations are grouped by exact (latitude, longitude) equality; no
/// coordinate snapping is applied, so readings differing by any fraction
/// form distinct points. Per group: unweighted mean severity, occurrence
/// count and the distinct organism names in first-seen order. Points come
/// out in first-seen coordinate order of the input scan.
pub fn build_heatmap(samples: &[ObservationSample]) -> Vec<HeatmapPoint> {
    struct Group {
        latitude: Decimal,
        longitude: Decimal,
        total_severity: Decimal,
        count: i64,
        organisms: Vec<String>,
    }

    let mut order: HashMap<(Decimal, Decimal), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for sample in samples {
        let key = (sample.latitude, sample.longitude);
        let idx = *order.entry(key).or_insert_with(|| {
            groups.push(Group {
                latitude: sample.latitude,
                longitude: sample.longitude,
                total_severity: Decimal::ZERO,
                count: 0,
                organisms: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group.total_severity += sample.severity;
        group.count += 1;
        if !group.organisms.iter().any(|o| o == &sample.organism_name) {
            group.organisms.push(sample.organism_name.clone());
        }
    }

    groups
        .into_iter()
        .map(|group| {
            let average = group.total_severity / Decimal::from(group.count);
            let tier = classify_severity(average);
            HeatmapPoint {
                latitude: group.latitude,
                longitude: group.longitude,
                average_severity: average,
                occurrence_count: group.count,
                intensity: severity_intensity(average),
                tier,
                color: tier.color().to_string(),
                organisms: group.organisms,
            }
        })
        .collect()
}
