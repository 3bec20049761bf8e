//! Farm sync service: farm-batch upserts, farm reads and sync status

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use shared::{
    validate_area, validate_name, validate_polygon, Farm, FarmSyncInput, GpsCoordinates, Plot,
};

use crate::error::{AppError, AppResult};

/// Farm service handling the farm batch of the sync protocol
#[derive(Clone)]
pub struct FarmService {
    db: PgPool,
}

/// Farm row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct FarmRecord {
    id: Uuid,
    name: String,
    state: Option<String>,
    city: Option<String>,
    owner_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    total_area: Option<Decimal>,
    plots_count: Option<i32>,
    cultures: Json<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FarmRecord> for Farm {
    fn from(record: FarmRecord) -> Self {
        Farm {
            id: record.id,
            name: record.name,
            state: record.state,
            city: record.city,
            owner_name: record.owner_name,
            phone: record.phone,
            email: record.email,
            total_area: record.total_area,
            plots_count: record.plots_count,
            cultures: record.cultures.0,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Plot row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
struct PlotRecord {
    id: Uuid,
    farm_id: Uuid,
    name: String,
    area: Option<Decimal>,
    polygon: Json<Vec<GpsCoordinates>>,
    culture_id: Option<Uuid>,
    culture_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlotRecord> for Plot {
    fn from(record: PlotRecord) -> Self {
        Plot {
            id: record.id,
            farm_id: record.farm_id,
            name: record.name,
            area: record.area,
            polygon: record.polygon.0,
            culture_id: record.culture_id,
            culture_name: record.culture_name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// A farm with its plots
#[derive(Debug)]
pub struct FarmWithPlots {
    pub farm: Farm,
    pub plots: Vec<Plot>,
}

/// Per-farm sync status
#[derive(Debug, Serialize)]
pub struct SyncStatus {
    pub farm_id: Uuid,
    pub plots_count: i64,
    pub monitorings_count: i64,
    pub points_count: i64,
    pub reports_count: i64,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl FarmService {
    /// Create a new FarmService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply a farm batch: the farm row plus its plots, atomically.
    ///
    /// Upserts are keyed by id with full-field overwrite on conflict;
    /// repeating an identical batch only advances the update timestamps.
    /// Either every row in the batch commits or none does.
    pub async fn sync_farm(&self, input: FarmSyncInput) -> AppResult<Uuid> {
        Self::validate(&input)?;

        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO farms (id, name, state, city, owner_name, phone, email,
                               total_area, plots_count, cultures)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                state = EXCLUDED.state,
                city = EXCLUDED.city,
                owner_name = EXCLUDED.owner_name,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                total_area = EXCLUDED.total_area,
                plots_count = EXCLUDED.plots_count,
                cultures = EXCLUDED.cultures,
                updated_at = NOW()
            "#,
        )
        .bind(input.farm.id)
        .bind(&input.farm.name)
        .bind(&input.farm.state)
        .bind(&input.farm.city)
        .bind(&input.farm.owner_name)
        .bind(&input.farm.phone)
        .bind(&input.farm.email)
        .bind(input.farm.total_area)
        .bind(input.farm.plots_count)
        .bind(Json(&input.farm.cultures))
        .execute(&mut *tx)
        .await?;

        // Parent row is in place; children join the same transaction
        for plot in &input.plots {
            sqlx::query(
                r#"
                INSERT INTO plots (id, farm_id, name, area, polygon, culture_id, culture_name)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE SET
                    farm_id = EXCLUDED.farm_id,
                    name = EXCLUDED.name,
                    area = EXCLUDED.area,
                    polygon = EXCLUDED.polygon,
                    culture_id = EXCLUDED.culture_id,
                    culture_name = EXCLUDED.culture_name,
                    updated_at = NOW()
                "#,
            )
            .bind(plot.id)
            .bind(input.farm.id)
            .bind(&plot.name)
            .bind(plot.area)
            .bind(Json(&plot.polygon))
            .bind(plot.culture_id)
            .bind(&plot.culture_name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(input.farm.id)
    }

    /// Reject malformed batches before any write happens
    fn validate(input: &FarmSyncInput) -> AppResult<()> {
        validate_name(&input.farm.name).map_err(|msg| AppError::Validation {
            field: "farm.name".to_string(),
            message: msg.to_string(),
        })?;

        if let Some(area) = input.farm.total_area {
            validate_area(area).map_err(|msg| AppError::Validation {
                field: "farm.total_area".to_string(),
                message: msg.to_string(),
            })?;
        }

        for plot in &input.plots {
            validate_name(&plot.name).map_err(|msg| AppError::Validation {
                field: "plots.name".to_string(),
                message: msg.to_string(),
            })?;

            if let Some(area) = plot.area {
                validate_area(area).map_err(|msg| AppError::Validation {
                    field: "plots.area".to_string(),
                    message: msg.to_string(),
                })?;
            }

            validate_polygon(&plot.polygon).map_err(|msg| AppError::Validation {
                field: "plots.polygon".to_string(),
                message: msg.to_string(),
            })?;
        }

        Ok(())
    }

    /// Fetch a farm with its plots
    pub async fn get_farm_with_plots(&self, farm_id: Uuid) -> AppResult<FarmWithPlots> {
        let farm = sqlx::query_as::<_, FarmRecord>(
            r#"
            SELECT id, name, state, city, owner_name, phone, email, total_area,
                   plots_count, cultures, created_at, updated_at
            FROM farms
            WHERE id = $1
            "#,
        )
        .bind(farm_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;

        let plots = sqlx::query_as::<_, PlotRecord>(
            r#"
            SELECT id, farm_id, name, area, polygon, culture_id, culture_name,
                   created_at, updated_at
            FROM plots
            WHERE farm_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(farm_id)
        .fetch_all(&self.db)
        .await?;

        Ok(FarmWithPlots {
            farm: farm.into(),
            plots: plots.into_iter().map(Plot::from).collect(),
        })
    }

    /// Sync status for a farm: entity counts and the latest write time
    pub async fn sync_status(&self, farm_id: Uuid) -> AppResult<SyncStatus> {
        let exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM farms WHERE id = $1")
                .bind(farm_id)
                .fetch_one(&self.db)
                .await?;

        if exists == 0 {
            return Err(AppError::NotFound("Farm".to_string()));
        }

        let counts = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM plots WHERE farm_id = $1),
                (SELECT COUNT(*) FROM monitorings WHERE farm_id = $1),
                (SELECT COUNT(*) FROM infestation_points ip
                    JOIN monitorings m ON m.id = ip.monitoring_id
                    WHERE m.farm_id = $1),
                (SELECT COUNT(*) FROM agronomic_reports WHERE farm_id = $1)
            "#,
        )
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        let last_synced_at = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r#"
            SELECT GREATEST(
                (SELECT MAX(updated_at) FROM farms WHERE id = $1),
                (SELECT MAX(updated_at) FROM plots WHERE farm_id = $1),
                (SELECT MAX(updated_at) FROM monitorings WHERE farm_id = $1),
                (SELECT MAX(ip.updated_at) FROM infestation_points ip
                    JOIN monitorings m ON m.id = ip.monitoring_id
                    WHERE m.farm_id = $1)
            )
            "#,
        )
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        Ok(SyncStatus {
            farm_id,
            plots_count: counts.0,
            monitorings_count: counts.1,
            points_count: counts.2,
            reports_count: counts.3,
            last_synced_at,
        })
    }
}
