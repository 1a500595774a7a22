//! Base fee domain: multi-resolution series, snapshot store, time frame selection.

mod convert;
pub mod select;
pub mod state;
pub mod wire;

use crate::shared::{gwei_from_wei, TimeFrame};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use select::{select, Selection};
pub use state::SeriesStore;

/// One base fee sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    /// Base fee per gas in wei.
    pub wei: Decimal,
}

impl SeriesPoint {
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    pub fn gwei(&self) -> Decimal {
        gwei_from_wei(self.wei)
    }
}

/// One refresh worth of base fee data.
///
/// `barrier` and `block_number` describe the whole snapshot, not a single
/// resolution. `all` stays `None` until the full-history series exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiResolutionSeries {
    /// Barrier in Gwei.
    pub barrier: Decimal,
    pub block_number: u64,
    pub m5: Vec<SeriesPoint>,
    pub h1: Vec<SeriesPoint>,
    pub d1: Vec<SeriesPoint>,
    pub d7: Vec<SeriesPoint>,
    pub d30: Vec<SeriesPoint>,
    pub all: Option<Vec<SeriesPoint>>,
}

impl MultiResolutionSeries {
    /// Points for a time frame, or `None` when that series has not arrived.
    pub fn series(&self, time_frame: TimeFrame) -> Option<&[SeriesPoint]> {
        match time_frame {
            TimeFrame::Minute5 => Some(&self.m5),
            TimeFrame::Hour1 => Some(&self.h1),
            TimeFrame::Day1 => Some(&self.d1),
            TimeFrame::Day7 => Some(&self.d7),
            TimeFrame::Day30 => Some(&self.d30),
            TimeFrame::All => self.all.as_deref(),
        }
    }
}

/// Whether points are in non-decreasing timestamp order.
pub fn is_ascending(points: &[SeriesPoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
