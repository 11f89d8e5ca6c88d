use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Kitten;

/// A kitten annotated with its latest weight and the change since the
/// previous measurement.
///
/// Absent fields are omitted from JSON: `weight_change` is never reported as
/// zero when it cannot be computed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KittenSummary {
    #[serde(flatten)]
    pub kitten: Kitten,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_weight_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_change: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_change_days: Option<i64>,
}
