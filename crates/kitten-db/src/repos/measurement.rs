//! Weight measurement repository: CRUD plus the recent-weights feed.

use chrono::Utc;

use kitten_core::entities::{NewMeasurement, RecentMeasurement, WeightMeasurement};

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, opt_value, parse_datetime};
use crate::service::KittenService;
use crate::updates::measurement::MeasurementUpdate;

pub(crate) const SELECT_COLS: &str =
    "id, kitten_id, weight_grams, measurement_date, notes, created_at";

pub(crate) fn row_to_measurement(row: &libsql::Row) -> Result<WeightMeasurement, DatabaseError> {
    Ok(WeightMeasurement {
        id: row.get(0)?,
        kitten_id: row.get(1)?,
        weight_grams: row.get(2)?,
        measurement_date: parse_datetime(&row.get::<String>(3)?)?,
        notes: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl KittenService {
    /// Measurements for one kitten, newest first. Unknown kittens yield an empty list.
    pub async fn list_measurements_for_kitten(
        &self,
        kitten_id: i64,
    ) -> Result<Vec<WeightMeasurement>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM weight_measurements \
                     WHERE kitten_id = ?1 ORDER BY measurement_date DESC, id DESC"
                ),
                [kitten_id],
            )
            .await?;

        let mut measurements = Vec::new();
        while let Some(row) = rows.next().await? {
            measurements.push(row_to_measurement(&row)?);
        }
        Ok(measurements)
    }

    pub async fn get_measurement(&self, id: i64) -> Result<Option<WeightMeasurement>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM weight_measurements WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_measurement(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a measurement and return its id.
    ///
    /// A missing `measurement_date` defaults to now. An unknown `kitten_id` is
    /// rejected by the foreign key and surfaces as `DatabaseError::LibSql`.
    pub async fn create_measurement(
        &self,
        measurement: &NewMeasurement,
    ) -> Result<i64, DatabaseError> {
        let now = Utc::now();
        let measured_at = measurement.measurement_date.unwrap_or(now);

        self.db()
            .conn()
            .execute(
                "INSERT INTO weight_measurements \
                 (kitten_id, weight_grams, measurement_date, notes, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    measurement.kitten_id,
                    measurement.weight_grams,
                    format_datetime(measured_at),
                    measurement.notes.as_deref(),
                    format_datetime(now)
                ],
            )
            .await?;

        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(
            id,
            kitten_id = measurement.kitten_id,
            weight_grams = measurement.weight_grams,
            "recorded weight"
        );
        Ok(id)
    }

    /// Apply a partial update. Returns whether a row matched.
    pub async fn update_measurement(
        &self,
        id: i64,
        update: MeasurementUpdate,
    ) -> Result<bool, DatabaseError> {
        if update.is_empty() {
            return Ok(self.get_measurement(id).await?.is_some());
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(weight_grams) = update.weight_grams {
            sets.push(format!("weight_grams = ?{idx}"));
            params.push(weight_grams.into());
            idx += 1;
        }
        if let Some(measurement_date) = update.measurement_date {
            sets.push(format!("measurement_date = ?{idx}"));
            params.push(format_datetime(measurement_date).into());
            idx += 1;
        }
        if let Some(notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(opt_value(notes));
            idx += 1;
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE weight_measurements SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(id, changed, "updated weight");
        Ok(changed > 0)
    }

    pub async fn delete_measurement(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM weight_measurements WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, changed, "deleted weight");
        Ok(changed > 0)
    }

    /// The most recent `limit` measurements across all kittens, with kitten names.
    pub async fn list_recent_measurements(
        &self,
        limit: u32,
    ) -> Result<Vec<RecentMeasurement>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT w.id, w.kitten_id, w.weight_grams, w.measurement_date, w.notes, \
                 w.created_at, k.name \
                 FROM weight_measurements w \
                 JOIN kittens k ON w.kitten_id = k.id \
                 ORDER BY w.measurement_date DESC, w.id DESC \
                 LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut recent = Vec::new();
        while let Some(row) = rows.next().await? {
            recent.push(RecentMeasurement {
                measurement: row_to_measurement(&row)?,
                kitten_name: row.get(6)?,
            });
        }
        Ok(recent)
    }
}
