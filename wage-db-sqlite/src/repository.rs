use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::debug;
use wage_core::{
    CompensationProfile, CompensationRecord, CompensationRepository, MonthLabel, MonthlySnapshot,
    NewSnapshot, RecordTerms, RepositoryError, Vehicle, VehicleKind,
};

use crate::columns::{read_amount, read_column, read_optional_amount, to_real};

const RECORD_COLUMNS: &str = "id, name, salary, rsu, match_401k, bonus_percent,
    commute_time_minutes, commute_distance_miles, car_type, fuel_cost, car_cost,
    car_mileage, daily_hours, gas_mileage, electric_efficiency, created_date,
    real_hourly_wage";

const SNAPSHOT_QUERY: &str = "SELECT m.id, m.record_id, c.name, m.month_year,
        m.total_compensation, m.commute_cost, m.work_hours, m.real_hourly_wage
     FROM monthly_calculations m
     JOIN compensation_records c ON m.record_id = c.id";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens `database_url`, creating the file if it does not exist.
    ///
    /// Accepts a bare path, `:memory:` or a `sqlite:` URL. The pool holds a
    /// single connection that never expires, so an in-memory database lives
    /// as long as the repository.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database location: {}", database_url))?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

fn row_to_record(row: &SqliteRow) -> Result<CompensationRecord, RepositoryError> {
    let id: i64 = read_column(row, "id")?;
    let car_type: String = read_column(row, "car_type")?;
    let kind = VehicleKind::parse(&car_type).ok_or_else(|| {
        RepositoryError::InvalidRecord(format!("record {}: unknown car type '{}'", id, car_type))
    })?;
    let vehicle = Vehicle::from_parts(
        kind,
        read_amount(row, "fuel_cost")?,
        read_optional_amount(row, "gas_mileage")?,
        read_optional_amount(row, "electric_efficiency")?,
    )
    .ok_or_else(|| {
        RepositoryError::InvalidRecord(format!(
            "record {}: efficiency columns do not match car type '{}'",
            id, car_type
        ))
    })?;

    Ok(CompensationRecord {
        id,
        profile: CompensationProfile {
            name: read_column(row, "name")?,
            salary: read_amount(row, "salary")?,
            rsu: read_amount(row, "rsu")?,
            match_401k_percent: read_amount(row, "match_401k")?,
            bonus_percent: read_amount(row, "bonus_percent")?,
            commute_minutes: read_amount(row, "commute_time_minutes")?,
            commute_miles: read_amount(row, "commute_distance_miles")?,
            vehicle,
            vehicle_cost: read_amount(row, "car_cost")?,
            vehicle_lifetime_miles: read_amount(row, "car_mileage")?,
            daily_hours: read_amount(row, "daily_hours")?,
        },
        real_hourly_wage: read_amount(row, "real_hourly_wage")?,
        created_at: read_column::<DateTime<Utc>>(row, "created_date")?,
    })
}

fn row_to_snapshot(row: &SqliteRow) -> Result<MonthlySnapshot, RepositoryError> {
    let id: i64 = read_column(row, "id")?;
    let month_year: String = read_column(row, "month_year")?;
    let month = MonthLabel::parse(&month_year).ok_or_else(|| {
        RepositoryError::InvalidRecord(format!("snapshot {}: bad month '{}'", id, month_year))
    })?;

    Ok(MonthlySnapshot {
        id,
        record_id: read_column(row, "record_id")?,
        name: read_column(row, "name")?,
        month,
        total_compensation: read_amount(row, "total_compensation")?,
        commute_cost: read_amount(row, "commute_cost")?,
        work_hours: read_amount(row, "work_hours")?,
        real_hourly_wage: read_amount(row, "real_hourly_wage")?,
    })
}

/// Appends `snapshot` for `record_id` on the given connection.
async fn insert_snapshot(
    conn: &mut sqlx::SqliteConnection,
    record_id: i64,
    snapshot: &NewSnapshot,
) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO monthly_calculations (
            record_id, month_year, total_compensation, commute_cost, work_hours,
            real_hourly_wage
        ) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(record_id)
    .bind(snapshot.month.as_str())
    .bind(to_real(snapshot.total_compensation)?)
    .bind(to_real(snapshot.commute_cost)?)
    .bind(to_real(snapshot.work_hours)?)
    .bind(to_real(snapshot.real_hourly_wage)?)
    .execute(conn)
    .await
    .map_err(db_error)?;
    Ok(())
}

#[async_trait]
impl CompensationRepository for SqliteRepository {
    async fn create_record(
        &self,
        profile: &CompensationProfile,
        snapshot: &NewSnapshot,
    ) -> Result<CompensationRecord, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(
            "INSERT INTO compensation_records (
                name, salary, rsu, match_401k, bonus_percent, commute_time_minutes,
                commute_distance_miles, car_type, fuel_cost, car_cost, car_mileage,
                daily_hours, gas_mileage, electric_efficiency, created_date,
                real_hourly_wage
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&profile.name)
        .bind(to_real(profile.salary)?)
        .bind(to_real(profile.rsu)?)
        .bind(to_real(profile.match_401k_percent)?)
        .bind(to_real(profile.bonus_percent)?)
        .bind(to_real(profile.commute_minutes)?)
        .bind(to_real(profile.commute_miles)?)
        .bind(profile.vehicle.kind().as_str())
        .bind(to_real(profile.vehicle.unit_price())?)
        .bind(to_real(profile.vehicle_cost)?)
        .bind(to_real(profile.vehicle_lifetime_miles)?)
        .bind(to_real(profile.daily_hours)?)
        .bind(profile.vehicle.gas_mileage().map(to_real).transpose()?)
        .bind(profile.vehicle.electric_efficiency().map(to_real).transpose()?)
        .bind(Utc::now())
        .bind(to_real(snapshot.real_hourly_wage)?)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        let id = result.last_insert_rowid();
        insert_snapshot(&mut tx, id, snapshot).await?;
        tx.commit().await.map_err(db_error)?;

        debug!(record_id = id, month = %snapshot.month, "Inserted record and snapshot");
        self.get_record(id).await
    }

    async fn get_record(
        &self,
        id: i64,
    ) -> Result<CompensationRecord, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM compensation_records WHERE id = ?",
            RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        row_to_record(&row)
    }

    async fn list_records(&self) -> Result<Vec<CompensationRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM compensation_records ORDER BY created_date DESC, id DESC",
            RECORD_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(row_to_record).collect()
    }

    async fn update_record(
        &self,
        id: i64,
        terms: &RecordTerms,
        snapshot: &NewSnapshot,
    ) -> Result<CompensationRecord, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(
            "UPDATE compensation_records SET
                salary = ?, rsu = ?, daily_hours = ?, real_hourly_wage = ?
             WHERE id = ?",
        )
        .bind(to_real(terms.salary)?)
        .bind(to_real(terms.rsu)?)
        .bind(to_real(terms.daily_hours)?)
        .bind(to_real(snapshot.real_hourly_wage)?)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        insert_snapshot(&mut tx, id, snapshot).await?;
        tx.commit().await.map_err(db_error)?;

        debug!(record_id = id, month = %snapshot.month, "Updated record and appended snapshot");
        self.get_record(id).await
    }

    async fn list_snapshots(
        &self,
        record_id: Option<i64>,
    ) -> Result<Vec<MonthlySnapshot>, RepositoryError> {
        let rows = match record_id {
            Some(id) => {
                sqlx::query(&format!(
                    "{} WHERE m.record_id = ? ORDER BY m.month_year, m.id",
                    SNAPSHOT_QUERY
                ))
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!("{} ORDER BY m.month_year, m.id", SNAPSHOT_QUERY))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(db_error)?;

        rows.iter().map(row_to_snapshot).collect()
    }
}
