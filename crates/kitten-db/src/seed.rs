//! Sample data for demos and manual testing.
//!
//! Seeds three kittens: two Active kittens with a daily weigh-in history ending
//! on `today`, and one Adopted kitten with two fixed historical readings.
//! Per-day variation is derived from the day index so repeated seeds produce
//! the same weights.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use kitten_core::entities::{NewKitten, NewMeasurement};
use kitten_core::enums::{KittenStatus, Sex};

use crate::error::DatabaseError;
use crate::service::KittenService;

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub kittens: u32,
    pub measurements: u32,
}

struct Growth {
    readings: i64,
    base_grams: i64,
    grams_per_day: i64,
    wobble_step: i64,
    wobble_modulus: i64,
}

impl Growth {
    /// Weight on day `i` of the series (day 0 is the oldest reading).
    const fn grams(&self, i: i64) -> i64 {
        self.base_grams + i * self.grams_per_day + (i * self.wobble_step) % self.wobble_modulus
    }
}

impl KittenService {
    /// Insert the sample kittens and their measurements.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on the first failing insert. Rows inserted
    /// before the failure are kept.
    pub async fn seed_sample_data(&self, today: DateTime<Utc>) -> Result<SeedReport, DatabaseError> {
        let mut report = SeedReport::default();

        let mittens = self
            .create_kitten(&NewKitten {
                name: "Mittens".into(),
                birth_date: NaiveDate::from_ymd_opt(2024, 5, 1),
                rescue_date: NaiveDate::from_ymd_opt(2024, 5, 15),
                color: Some("Orange tabby".into()),
                sex: Sex::Male,
                status: KittenStatus::Active,
                notes: Some("Very playful, loves to climb".into()),
            })
            .await?;
        report.kittens += 1;
        let growth = Growth {
            readings: 10,
            base_grams: 85,
            grams_per_day: 8,
            wobble_step: 3,
            wobble_modulus: 5,
        };
        report.measurements += self
            .seed_daily_series(mittens, &growth, today, |i| {
                (i == growth.readings - 1).then(|| "Looking healthy and active!".to_string())
            })
            .await?;

        let shadow = self
            .create_kitten(&NewKitten {
                name: "Shadow".into(),
                birth_date: NaiveDate::from_ymd_opt(2024, 4, 28),
                rescue_date: NaiveDate::from_ymd_opt(2024, 5, 10),
                color: Some("Black".into()),
                sex: Sex::Female,
                status: KittenStatus::Active,
                notes: Some("Shy but very sweet".into()),
            })
            .await?;
        report.kittens += 1;
        let growth = Growth {
            readings: 8,
            base_grams: 78,
            grams_per_day: 6,
            wobble_step: 2,
            wobble_modulus: 3,
        };
        report.measurements += self
            .seed_daily_series(shadow, &growth, today, |i| {
                (i == 0).then(|| "Small when found, gaining slowly".to_string())
            })
            .await?;

        let patches = self
            .create_kitten(&NewKitten {
                name: "Patches".into(),
                birth_date: NaiveDate::from_ymd_opt(2024, 5, 3),
                rescue_date: NaiveDate::from_ymd_opt(2024, 5, 20),
                color: Some("Calico".into()),
                sex: Sex::Female,
                status: KittenStatus::Adopted,
                notes: Some("Beautiful calico, adopted by the Smith family".into()),
            })
            .await?;
        report.kittens += 1;
        for (grams, (y, m, d), note) in [
            (145, (2024, 5, 25), "Ready for adoption!"),
            (162, (2024, 6, 1), "Final weigh-in before going to new home"),
        ] {
            self.create_measurement(&NewMeasurement {
                kitten_id: patches,
                weight_grams: grams,
                measurement_date: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single(),
                notes: Some(note.to_string()),
            })
            .await?;
            report.measurements += 1;
        }

        tracing::info!(
            kittens = report.kittens,
            measurements = report.measurements,
            "sample data created"
        );
        Ok(report)
    }

    /// Delete every kitten; measurements follow by cascade.
    ///
    /// Returns the number of kittens removed.
    pub async fn clear_all_data(&self) -> Result<u64, DatabaseError> {
        let removed = self.db().conn().execute("DELETE FROM kittens", ()).await?;
        tracing::info!(kittens = removed, "all data cleared");
        Ok(removed)
    }

    async fn seed_daily_series(
        &self,
        kitten_id: i64,
        growth: &Growth,
        today: DateTime<Utc>,
        note_for: impl Fn(i64) -> Option<String>,
    ) -> Result<u32, DatabaseError> {
        let mut inserted = 0;
        for i in 0..growth.readings {
            self.create_measurement(&NewMeasurement {
                kitten_id,
                weight_grams: growth.grams(i),
                measurement_date: Some(today - Duration::days(growth.readings - 1 - i)),
                notes: note_for(i),
            })
            .await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
