//! Per-farm dashboard rollups

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many organisms the dashboard ranking returns
pub const TOP_ORGANISMS_LIMIT: usize = 10;

/// One observation row feeding the organism ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganismSample {
    pub organism_name: String,
    pub severity: Decimal,
}

/// An organism ranked by observation frequency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganismSummary {
    pub organism_name: String,
    pub occurrences: i64,
    pub average_severity: Decimal,
}

/// Dashboard summary for one farm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmDashboard {
    pub farm_id: Uuid,
    pub plots_count: i64,
    pub total_area: Decimal,
    pub monitorings_count: i64,
    pub top_organisms: Vec<OrganismSummary>,
}

/// Rank organisms by observation frequency, most frequent first
///
/// Frequency is the primary sort key; ties fall back to organism name so
/// the ordering is stable. The result is truncated to `limit` entries,
/// each carrying the unweighted mean severity for that organism.
pub fn rank_organisms(samples: &[OrganismSample], limit: usize) -> Vec<OrganismSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, Decimal, i64)> = Vec::new();

    for sample in samples {
        match index.get(&sample.organism_name) {
            Some(&i) => {
                totals[i].1 += sample.severity;
                totals[i].2 += 1;
            }
            None => {
                index.insert(sample.organism_name.clone(), totals.len());
                totals.push((sample.organism_name.clone(), sample.severity, 1));
            }
        }
    }

    totals.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    totals.truncate(limit);

    totals
        .into_iter()
        .map(|(organism_name, total, count)| OrganismSummary {
            organism_name,
            occurrences: count,
            average_severity: total / Decimal::from(count),
        })
        .collect()
}
