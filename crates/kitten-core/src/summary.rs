//! Recent-weight summary for the kitten listing.
//!
//! Pairs each kitten with its latest and previous measurement and derives the
//! signed weight change and the number of days between the two readings.
//! Input order does not matter: measurements are re-sorted per kitten by
//! `measurement_date` descending, ties broken by `id` descending.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::entities::{Kitten, KittenSummary, WeightMeasurement};
use crate::errors::CoreError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Build the display-ordered summary list.
///
/// # Errors
///
/// Returns `CoreError::DataIntegrity` if a measurement references a kitten
/// that is not part of `kittens`.
pub fn summarize(
    kittens: Vec<Kitten>,
    measurements: Vec<WeightMeasurement>,
) -> Result<Vec<KittenSummary>, CoreError> {
    let known: HashSet<i64> = kittens.iter().map(|k| k.id).collect();

    let mut by_kitten: HashMap<i64, Vec<WeightMeasurement>> = HashMap::new();
    for measurement in measurements {
        if !known.contains(&measurement.kitten_id) {
            return Err(CoreError::DataIntegrity(format!(
                "weight measurement {} references missing kitten {}",
                measurement.id, measurement.kitten_id
            )));
        }
        by_kitten
            .entry(measurement.kitten_id)
            .or_default()
            .push(measurement);
    }

    let mut summaries: Vec<KittenSummary> = kittens
        .into_iter()
        .map(|kitten| {
            let mut history = by_kitten.remove(&kitten.id).unwrap_or_default();
            history.sort_by(newest_first);
            summarize_one(kitten, &history)
        })
        .collect();

    summaries.sort_by(|a, b| display_order(&a.kitten, &b.kitten));
    Ok(summaries)
}

/// Ordering of measurements from newest to oldest.
#[must_use]
pub fn newest_first(a: &WeightMeasurement, b: &WeightMeasurement) -> Ordering {
    b.measurement_date
        .cmp(&a.measurement_date)
        .then_with(|| b.id.cmp(&a.id))
}

/// Listing order: Active kittens first, then by name (byte-wise, like
/// SQLite's `BINARY` collation), then by id.
#[must_use]
pub fn display_order(a: &Kitten, b: &Kitten) -> Ordering {
    b.status
        .is_active()
        .cmp(&a.status.is_active())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Whole days between two readings, rounded up.
///
/// Identical timestamps give 0; any positive gap shorter than a day gives 1.
#[must_use]
pub fn days_between(latest: DateTime<Utc>, previous: DateTime<Utc>) -> i64 {
    let millis = (latest - previous).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}

fn summarize_one(kitten: Kitten, history: &[WeightMeasurement]) -> KittenSummary {
    let latest = history.first();
    let previous = history.get(1);

    let (weight_change, weight_change_days) = match (latest, previous) {
        (Some(latest), Some(previous)) => (
            Some(latest.weight_grams - previous.weight_grams),
            Some(days_between(
                latest.measurement_date,
                previous.measurement_date,
            )),
        ),
        _ => (None, None),
    };

    KittenSummary {
        kitten,
        latest_weight: latest.map(|m| m.weight_grams),
        latest_weight_date: latest.map(|m| m.measurement_date),
        weight_change,
        weight_change_days,
    }
}
