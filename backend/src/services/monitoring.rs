//! Monitoring visit sync service
//!
//! A monitoring batch carries one visit plus its observation points and
//! is applied in a single transaction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use shared::{validate_name, Monitoring, MonitoringSyncInput, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::services::infestation::{upsert_point, validate_points};

/// Monitoring service handling the visit batch of the sync protocol
#[derive(Clone)]
pub struct MonitoringService {
    db: PgPool,
}

/// Outcome of a monitoring batch
#[derive(Debug, Serialize)]
pub struct MonitoringSyncOutcome {
    pub monitoring_id: Uuid,
    pub points_count: usize,
}

/// Monitoring row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct MonitoringRecord {
    id: Uuid,
    farm_id: Uuid,
    plot_id: Uuid,
    monitoring_date: DateTime<Utc>,
    crop_name: String,
    plot_name: String,
    weather: Option<Json<WeatherSnapshot>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MonitoringRecord> for Monitoring {
    fn from(record: MonitoringRecord) -> Self {
        Monitoring {
            id: record.id,
            farm_id: record.farm_id,
            plot_id: record.plot_id,
            date: record.monitoring_date,
            crop_name: record.crop_name,
            plot_name: record.plot_name,
            weather: record.weather.map(|w| w.0),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl MonitoringService {
    /// Create a new MonitoringService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply a monitoring batch atomically.
    ///
    /// The referenced plot must already belong to the referenced farm.
    /// Crop and plot name are point-in-time snapshots: written once,
    /// never touched by the conflict clause.
    pub async fn sync_monitoring(
        &self,
        input: MonitoringSyncInput,
    ) -> AppResult<MonitoringSyncOutcome> {
        let farm_id = input.monitoring.farm_id.ok_or_else(|| AppError::Validation {
            field: "monitoring.farm_id".to_string(),
            message: "farm_id is required".to_string(),
        })?;

        let plot_id = input.monitoring.plot_id.ok_or_else(|| AppError::Validation {
            field: "monitoring.plot_id".to_string(),
            message: "plot_id is required".to_string(),
        })?;

        validate_name(&input.monitoring.crop_name).map_err(|msg| AppError::Validation {
            field: "monitoring.crop_name".to_string(),
            message: msg.to_string(),
        })?;

        validate_points(&input.points)?;

        let mut tx = self.db.begin().await?;

        let plot_matches = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM plots WHERE id = $1 AND farm_id = $2)",
        )
        .bind(plot_id)
        .bind(farm_id)
        .fetch_one(&mut *tx)
        .await?;

        if !plot_matches {
            return Err(AppError::Referential(format!(
                "Plot {} does not belong to farm {}",
                plot_id, farm_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO monitorings (id, farm_id, plot_id, monitoring_date,
                                     crop_name, plot_name, weather)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                monitoring_date = EXCLUDED.monitoring_date,
                weather = EXCLUDED.weather,
                updated_at = NOW()
            "#,
        )
        .bind(input.monitoring.id)
        .bind(farm_id)
        .bind(plot_id)
        .bind(input.monitoring.date)
        .bind(&input.monitoring.crop_name)
        .bind(&input.monitoring.plot_name)
        .bind(input.monitoring.weather.as_ref().map(Json))
        .execute(&mut *tx)
        .await?;

        for point in &input.points {
            upsert_point(&mut tx, input.monitoring.id, point).await?;
        }

        tx.commit().await?;

        Ok(MonitoringSyncOutcome {
            monitoring_id: input.monitoring.id,
            points_count: input.points.len(),
        })
    }

    /// Visit history for a plot, newest first
    pub async fn monitorings_by_plot(&self, plot_id: Uuid) -> AppResult<Vec<Monitoring>> {
        let records = sqlx::query_as::<_, MonitoringRecord>(
            r#"
            SELECT id, farm_id, plot_id, monitoring_date, crop_name, plot_name,
                   weather, created_at, updated_at
            FROM monitorings
            WHERE plot_id = $1
            ORDER BY monitoring_date DESC
            "#,
        )
        .bind(plot_id)
        .fetch_all(&self.db)
        .await?;

        Ok(records.into_iter().map(Monitoring::from).collect())
    }
}
