//! Kitten listing with latest/previous weight.
//!
//! Storage narrows the measurement set to the two newest rows per kitten with
//! a window function; `kitten_core::summary` pairs them up and derives the
//! change figures.

use kitten_core::entities::{KittenSummary, WeightMeasurement};
use kitten_core::summary::summarize;

use crate::error::DatabaseError;
use crate::repos::measurement::{SELECT_COLS, row_to_measurement};
use crate::service::KittenService;

impl KittenService {
    /// Every kitten with its recent-weight summary, Active kittens first.
    pub async fn list_kitten_summaries(&self) -> Result<Vec<KittenSummary>, DatabaseError> {
        let kittens = self.list_kittens().await?;
        let recent = self.two_newest_per_kitten().await?;
        Ok(summarize(kittens, recent)?)
    }

    async fn two_newest_per_kitten(&self) -> Result<Vec<WeightMeasurement>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM ( \
                         SELECT {SELECT_COLS}, \
                                ROW_NUMBER() OVER ( \
                                    PARTITION BY kitten_id \
                                    ORDER BY measurement_date DESC, id DESC \
                                ) AS rn \
                         FROM weight_measurements \
                     ) WHERE rn <= 2"
                ),
                (),
            )
            .await?;

        let mut measurements = Vec::new();
        while let Some(row) = rows.next().await? {
            measurements.push(row_to_measurement(&row)?);
        }
        Ok(measurements)
    }
}
