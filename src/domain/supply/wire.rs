//! Wire types for the scarcity feed.

use serde::{Deserialize, Serialize};

/// Only the circulating supply is consumed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scarcity {
    /// Circulating supply in wei, as an integer string.
    pub eth_supply: String,
}
