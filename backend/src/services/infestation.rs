//! Infestation observation sync and the per-plot observation feed

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use shared::{
    validate_name, validate_quantity, validate_severity, DateRange, InfestationPointInput,
    InfestationSyncInput,
};

use crate::error::{AppError, AppResult};

/// Infestation service handling observation batches
#[derive(Clone)]
pub struct InfestationService {
    db: PgPool,
}

/// Observation row joined with its monitoring context
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PlotObservation {
    pub id: Uuid,
    pub monitoring_id: Uuid,
    pub organism_id: Option<Uuid>,
    pub organism_name: String,
    pub severity: Decimal,
    pub quantity: i32,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub observed_at: DateTime<Utc>,
    pub monitoring_date: DateTime<Utc>,
    pub crop_name: String,
    pub plot_name: String,
}

impl InfestationService {
    /// Create a new InfestationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply an observation batch against an existing monitoring.
    ///
    /// All points commit in one transaction. An empty batch writes
    /// nothing and succeeds with a zero count; the parent monitoring is
    /// still required to resolve.
    pub async fn sync_points(&self, input: InfestationSyncInput) -> AppResult<usize> {
        let monitoring_id = input.monitoring_id.ok_or_else(|| AppError::Validation {
            field: "monitoring_id".to_string(),
            message: "monitoring_id is required".to_string(),
        })?;

        validate_points(&input.points)?;

        let mut tx = self.db.begin().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM monitorings WHERE id = $1)",
        )
        .bind(monitoring_id)
        .fetch_one(&mut *tx)
        .await?;

        if !exists {
            return Err(AppError::Referential(format!(
                "Monitoring {} does not exist",
                monitoring_id
            )));
        }

        for point in &input.points {
            upsert_point(&mut tx, monitoring_id, point).await?;
        }

        tx.commit().await?;

        Ok(input.points.len())
    }

    /// Observations for a plot, newest first
    pub async fn observations_by_plot(
        &self,
        plot_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<PlotObservation>> {
        let observations = sqlx::query_as::<_, PlotObservation>(
            r#"
            SELECT ip.id, ip.monitoring_id, ip.organism_id, ip.organism_name,
                   ip.severity, ip.quantity, ip.latitude, ip.longitude,
                   ip.observed_at, m.monitoring_date, m.crop_name, m.plot_name
            FROM infestation_points ip
            JOIN monitorings m ON m.id = ip.monitoring_id
            WHERE m.plot_id = $1
              AND ($2::date IS NULL OR ip.observed_at::date >= $2)
              AND ($3::date IS NULL OR ip.observed_at::date <= $3)
            ORDER BY ip.observed_at DESC
            "#,
        )
        .bind(plot_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(&self.db)
        .await?;

        Ok(observations)
    }
}

/// Reject out-of-range observation fields before any write
pub(crate) fn validate_points(points: &[InfestationPointInput]) -> AppResult<()> {
    for point in points {
        validate_name(&point.organism_name).map_err(|msg| AppError::Validation {
            field: "points.organism_name".to_string(),
            message: msg.to_string(),
        })?;

        validate_severity(point.severity).map_err(|msg| AppError::Validation {
            field: "points.severity".to_string(),
            message: msg.to_string(),
        })?;

        validate_quantity(point.quantity).map_err(|msg| AppError::Validation {
            field: "points.quantity".to_string(),
            message: msg.to_string(),
        })?;
    }

    Ok(())
}

/// Upsert one observation inside the batch transaction.
///
/// Points submitted without an id get a server-generated one.
pub(crate) async fn upsert_point(
    tx: &mut Transaction<'_, Postgres>,
    monitoring_id: Uuid,
    point: &InfestationPointInput,
) -> AppResult<()> {
    let point_id = point.id.unwrap_or_else(Uuid::new_v4);

    sqlx::query(
        r#"
        INSERT INTO infestation_points (id, monitoring_id, organism_id, organism_name,
                                        severity, quantity, latitude, longitude, observed_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (id) DO UPDATE SET
            organism_id = EXCLUDED.organism_id,
            organism_name = EXCLUDED.organism_name,
            severity = EXCLUDED.severity,
            quantity = EXCLUDED.quantity,
            latitude = EXCLUDED.latitude,
            longitude = EXCLUDED.longitude,
            observed_at = EXCLUDED.observed_at,
            updated_at = NOW()
        "#,
    )
    .bind(point_id)
    .bind(monitoring_id)
    .bind(point.organism_id)
    .bind(&point.organism_name)
    .bind(point.severity)
    .bind(point.quantity)
    .bind(point.latitude)
    .bind(point.longitude)
    .bind(point.date)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
