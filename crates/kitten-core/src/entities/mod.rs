//! Entity structs for all Kitten Weights domain objects.
//!
//! `Kitten` and `WeightMeasurement` map one-to-one onto the `kittens` and
//! `weight_measurements` tables. `KittenSummary` and `RecentMeasurement` are
//! read models assembled from joins. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod kitten;
mod measurement;
mod summary;

pub use kitten::{Kitten, NewKitten};
pub use measurement::{NewMeasurement, RecentMeasurement, WeightMeasurement};
pub use summary::KittenSummary;
