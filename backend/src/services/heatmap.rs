//! Heatmap aggregation service

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use shared::{build_heatmap, DateRange, HeatmapPoint, ObservationSample};

use crate::error::AppResult;

/// Heatmap service deriving severity maps from stored observations
#[derive(Clone)]
pub struct HeatmapService {
    db: PgPool,
}

impl HeatmapService {
    /// Create a new HeatmapService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Heatmap points for a plot.
    ///
    /// Observations are scanned in date order so aggregated points come
    /// out oldest-location-first. An unknown plot yields an empty list;
    /// absence of data is a normal outcome, not an error.
    pub async fn plot_heatmap(
        &self,
        plot_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<HeatmapPoint>> {
        let rows = sqlx::query_as::<_, (Decimal, Decimal, Decimal, String)>(
            r#"
            SELECT ip.latitude, ip.longitude, ip.severity, ip.organism_name
            FROM infestation_points ip
            JOIN monitorings m ON m.id = ip.monitoring_id
            WHERE m.plot_id = $1
              AND ($2::date IS NULL OR ip.observed_at::date >= $2)
              AND ($3::date IS NULL OR ip.observed_at::date <= $3)
            ORDER BY ip.observed_at ASC
            "#,
        )
        .bind(plot_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(&self.db)
        .await?;

        let samples: Vec<ObservationSample> = rows
            .into_iter()
            .map(|(latitude, longitude, severity, organism_name)| ObservationSample {
                latitude,
                longitude,
                severity,
                organism_name,
            })
            .collect();

        Ok(build_heatmap(&samples))
    }
}
