//! Burn rate domain: fee burn per minute, sampled per time frame.

mod convert;
pub mod wire;

use crate::shared::TimeFrame;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Burn rate at the time of sampling, per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnRate {
    /// ETH/minute.
    pub eth: Decimal,
    /// USD/minute.
    pub usd: Decimal,
}

/// Burn rates keyed by time frame.
///
/// Never holds an entry for [`TimeFrame::All`]; a frame missing from the map
/// has not been sampled yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurnRateSet {
    rates: HashMap<TimeFrame, BurnRate>,
}

impl BurnRateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rate. Entries for `All` are ignored.
    pub fn insert(&mut self, time_frame: TimeFrame, rate: BurnRate) {
        if time_frame == TimeFrame::All {
            tracing::debug!("Ignoring burn rate for the unbounded time frame");
            return;
        }
        self.rates.insert(time_frame, rate);
    }

    pub fn get(&self, time_frame: TimeFrame) -> Option<&BurnRate> {
        self.rates.get(&time_frame)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(TimeFrame, BurnRate)> for BurnRateSet {
    fn from_iter<I: IntoIterator<Item = (TimeFrame, BurnRate)>>(iter: I) -> Self {
        let mut set = BurnRateSet::new();
        for (time_frame, rate) in iter {
            set.insert(time_frame, rate);
        }
        set
    }
}
