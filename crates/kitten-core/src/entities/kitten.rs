use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{KittenStatus, Sex};

/// A kitten tracked by the rescue program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Kitten {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub rescue_date: Option<NaiveDate>,
    pub color: Option<String>,
    pub sex: Sex,
    pub status: KittenStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a kitten. Storage assigns `id` and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewKitten {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub rescue_date: Option<NaiveDate>,
    pub color: Option<String>,
    pub sex: Sex,
    pub status: KittenStatus,
    pub notes: Option<String>,
}

impl NewKitten {
    /// A kitten with only a name; every optional field empty, defaults for enums.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
