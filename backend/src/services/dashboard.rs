//! Dashboard summary service

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use shared::{rank_organisms, FarmDashboard, OrganismSample, TOP_ORGANISMS_LIMIT};

use crate::error::AppResult;

/// Dashboard service computing per-farm rollups
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Per-farm rollup: plot count and summed area, monitoring count and
    /// the most frequently observed organisms.
    ///
    /// Zero matching rows is a valid zero-filled result, not an error.
    pub async fn farm_dashboard(&self, farm_id: Uuid) -> AppResult<FarmDashboard> {
        let plot_stats = sqlx::query_as::<_, (i64, Decimal)>(
            "SELECT COUNT(*), COALESCE(SUM(area), 0) FROM plots WHERE farm_id = $1",
        )
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        let monitorings_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM monitorings WHERE farm_id = $1",
        )
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        let rows = sqlx::query_as::<_, (String, Decimal)>(
            r#"
            SELECT ip.organism_name, ip.severity
            FROM infestation_points ip
            JOIN monitorings m ON m.id = ip.monitoring_id
            WHERE m.farm_id = $1
            "#,
        )
        .bind(farm_id)
        .fetch_all(&self.db)
        .await?;

        let samples: Vec<OrganismSample> = rows
            .into_iter()
            .map(|(organism_name, severity)| OrganismSample {
                organism_name,
                severity,
            })
            .collect();

        Ok(FarmDashboard {
            farm_id,
            plots_count: plot_stats.0,
            total_area: plot_stats.1,
            monitorings_count,
            top_organisms: rank_organisms(&samples, TOP_ORGANISMS_LIMIT),
        })
    }
}
