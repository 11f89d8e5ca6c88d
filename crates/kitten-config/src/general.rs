//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of entries in the recent-weights feed.
const fn default_recent_weights_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Limit for `GET /weights` when neither `kitten_id` nor `limit` is given.
    #[serde(default = "default_recent_weights_limit")]
    pub recent_weights_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            recent_weights_limit: default_recent_weights_limit(),
        }
    }
}
