//! Agronomic report service
//!
//! Reports are append-only audit snapshots with server-generated ids, so
//! concurrent report syncs can never collide on an id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use shared::ReportSyncInput;

use crate::error::{AppError, AppResult};

/// Report service handling agronomic report snapshots
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

/// Stored report row
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ReportRecord {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub plot_id: Uuid,
    pub report_type: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub monitoring_data: Option<serde_json::Value>,
    pub infestation_analysis: Option<serde_json::Value>,
    pub heatmap_data: Option<serde_json::Value>,
    pub summary: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append a new report; a retransmitted payload produces another report
    pub async fn create_report(&self, input: ReportSyncInput) -> AppResult<Uuid> {
        let farm_id = input.farm_id.ok_or_else(|| AppError::Validation {
            field: "farm_id".to_string(),
            message: "farm_id is required".to_string(),
        })?;

        let plot_id = input.plot_id.ok_or_else(|| AppError::Validation {
            field: "plot_id".to_string(),
            message: "plot_id is required".to_string(),
        })?;

        let plot_matches = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM plots WHERE id = $1 AND farm_id = $2)",
        )
        .bind(plot_id)
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        if !plot_matches {
            return Err(AppError::Referential(format!(
                "Plot {} does not belong to farm {}",
                plot_id, farm_id
            )));
        }

        let report_id = Uuid::new_v4();
        let report_type = input
            .report_type
            .unwrap_or_else(|| "monitoring_summary".to_string());

        sqlx::query(
            r#"
            INSERT INTO agronomic_reports (id, farm_id, plot_id, report_type,
                                           period_start, period_end, monitoring_data,
                                           infestation_analysis, heatmap_data, summary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(report_id)
        .bind(farm_id)
        .bind(plot_id)
        .bind(&report_type)
        .bind(input.period.map(|p| p.start))
        .bind(input.period.map(|p| p.end))
        .bind(input.monitoring_data)
        .bind(input.infestation_analysis)
        .bind(input.heatmap_data)
        .bind(input.summary)
        .execute(&self.db)
        .await?;

        Ok(report_id)
    }

    /// Reports for a farm, newest first
    pub async fn reports_by_farm(&self, farm_id: Uuid) -> AppResult<Vec<ReportRecord>> {
        let reports = sqlx::query_as::<_, ReportRecord>(
            r#"
            SELECT id, farm_id, plot_id, report_type, period_start, period_end,
                   monitoring_data, infestation_analysis, heatmap_data, summary,
                   created_at
            FROM agronomic_reports
            WHERE farm_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(farm_id)
        .fetch_all(&self.db)
        .await?;

        Ok(reports)
    }
}
