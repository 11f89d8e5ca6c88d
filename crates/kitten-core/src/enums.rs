//! Sex and status enums for kittens.
//!
//! The serde representation is the exact string stored in SQL (and checked by
//! the `CHECK` constraints in the initial migration), so `as_str()` and the
//! serialized form never diverge.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

/// Recorded sex of a kitten.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Sex {
    #[serde(rename = "M", alias = "Male")]
    Male,
    #[serde(rename = "F", alias = "Female")]
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// KittenStatus
// ---------------------------------------------------------------------------

/// Where a kitten is in the rescue program.
///
/// Only `Active` kittens are listed first; the others share one group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum KittenStatus {
    #[default]
    Active,
    Adopted,
    #[serde(rename = "Medical Hold")]
    MedicalHold,
    Deceased,
}

impl KittenStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Adopted => "Adopted",
            Self::MedicalHold => "Medical Hold",
            Self::Deceased => "Deceased",
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for KittenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
