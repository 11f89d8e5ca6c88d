use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One timestamped weight reading for a kitten.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeightMeasurement {
    pub id: i64,
    pub kitten_id: i64,
    pub weight_grams: i64,
    pub measurement_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting a measurement.
///
/// `measurement_date: None` means "now" at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMeasurement {
    pub kitten_id: i64,
    pub weight_grams: i64,
    pub measurement_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// A measurement joined with its kitten's name, for the recent-weights feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentMeasurement {
    #[serde(flatten)]
    pub measurement: WeightMeasurement,
    pub kitten_name: String,
}
