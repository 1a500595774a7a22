//! Wire types for the base fee over time feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single base fee sample as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseFeeAtTime {
    pub block_number: u64,
    /// ISO-8601 timestamp.
    pub timestamp: String,
    /// Base fee per gas in wei; number or integer string.
    #[serde(with = "crate::shared::serde_util::decimal_flexible")]
    pub wei: Decimal,
}

/// Base fee samples at every resolution plus the live barrier.
///
/// `all` is `null` until the backend has computed the full-history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseFeeOverTime {
    /// Barrier in Gwei.
    #[serde(with = "crate::shared::serde_util::decimal_flexible")]
    pub barrier: Decimal,
    pub block_number: u64,
    pub all: Option<Vec<BaseFeeAtTime>>,
    pub d1: Vec<BaseFeeAtTime>,
    pub d30: Vec<BaseFeeAtTime>,
    pub d7: Vec<BaseFeeAtTime>,
    pub h1: Vec<BaseFeeAtTime>,
    pub m5: Vec<BaseFeeAtTime>,
}
