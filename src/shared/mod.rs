//! Shared types and utilities used across all domain modules.
//!
//! `TimeFrame` serializes identically to the keys the fee API uses, so it can
//! be used directly in wire types without conversion.

pub mod fmt;
pub mod sequenced;
pub mod serde_util;
pub mod units;

pub use sequenced::{IngestOutcome, SnapshotSlot};
pub use units::{eth_from_wei, gwei_from_wei, parse_wei, WEI_PER_ETH, WEI_PER_GWEI};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ─── TimeFrame ───────────────────────────────────────────────────────────────

/// Look-back window selectable on the dashboard.
///
/// Exactly these six values exist; every mapping below is a total `match`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "1h")]
    Hour1,
    #[default]
    #[serde(rename = "24h")]
    Day1,
    #[serde(rename = "7d")]
    Day7,
    #[serde(rename = "30d")]
    Day30,
    #[serde(rename = "all")]
    All,
}

impl TimeFrame {
    /// All time frames in display order.
    pub const ALL: [TimeFrame; 6] = [
        TimeFrame::Minute5,
        TimeFrame::Hour1,
        TimeFrame::Day1,
        TimeFrame::Day7,
        TimeFrame::Day30,
        TimeFrame::All,
    ];

    /// Canonical key (`"5m"`, `"24h"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute5 => "5m",
            Self::Hour1 => "1h",
            Self::Day1 => "24h",
            Self::Day7 => "7d",
            Self::Day30 => "30d",
            Self::All => "all",
        }
    }

    /// Label shown on the time frame control. `24h` reads as `1d`.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Minute5 => "5m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
            Self::Day7 => "7d",
            Self::Day30 => "30d",
            Self::All => "all",
        }
    }

    /// Key of the resolution bucket in the base fee payload.
    pub fn resolution_key(&self) -> &'static str {
        match self {
            Self::Minute5 => "m5",
            Self::Hour1 => "h1",
            Self::Day1 => "d1",
            Self::Day7 => "d7",
            Self::Day30 => "d30",
            Self::All => "all",
        }
    }

    /// Length of the look-back window. `All` is unbounded.
    pub fn duration(&self) -> Option<Duration> {
        const MINUTE: u64 = 60;
        const HOUR: u64 = 60 * MINUTE;
        const DAY: u64 = 24 * HOUR;
        match self {
            Self::Minute5 => Some(Duration::from_secs(5 * MINUTE)),
            Self::Hour1 => Some(Duration::from_secs(HOUR)),
            Self::Day1 => Some(Duration::from_secs(DAY)),
            Self::Day7 => Some(Duration::from_secs(7 * DAY)),
            Self::Day30 => Some(Duration::from_secs(30 * DAY)),
            Self::All => None,
        }
    }

    /// The frame after this one; `All` wraps around to `5m`.
    pub fn next(&self) -> TimeFrame {
        match self {
            Self::Minute5 => Self::Hour1,
            Self::Hour1 => Self::Day1,
            Self::Day1 => Self::Day7,
            Self::Day7 => Self::Day30,
            Self::Day30 => Self::All,
            Self::All => Self::Minute5,
        }
    }

    /// Label for the time frame indicator.
    ///
    /// `All` shows the whole days elapsed since the London hard fork.
    pub fn indicator_label(&self, now: DateTime<Utc>, london_hard_fork: DateTime<Utc>) -> String {
        match self {
            Self::All => format!("{}d", (now - london_hard_fork).num_days()),
            other => other.display_label().to_string(),
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| crate::error::CoreError::Validation(format!("Unknown time frame: {}", s)))
    }
}
