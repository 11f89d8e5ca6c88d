//! Weight measurement update builder.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementUpdate {
    pub weight_grams: Option<i64>,
    pub measurement_date: Option<DateTime<Utc>>,
    pub notes: Option<Option<String>>,
}

impl MeasurementUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.weight_grams.is_none() && self.measurement_date.is_none() && self.notes.is_none()
    }
}

#[derive(Default)]
pub struct MeasurementUpdateBuilder(MeasurementUpdate);

impl MeasurementUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MeasurementUpdate::default())
    }

    #[must_use]
    pub fn weight_grams(mut self, weight_grams: i64) -> Self {
        self.0.weight_grams = Some(weight_grams);
        self
    }

    #[must_use]
    pub fn measurement_date(mut self, measurement_date: DateTime<Utc>) -> Self {
        self.0.measurement_date = Some(measurement_date);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> MeasurementUpdate {
        self.0
    }
}
