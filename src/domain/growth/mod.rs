//! Growth domain: annualized net supply growth from issuance and burn.

pub mod calculator;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use calculator::{
    burn_year, round_half_up, GrowthRateCalculator, GrowthRateTracker, MINUTES_PER_YEAR,
};

/// A rounded growth rate (fraction per year) and when it was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateSample {
    pub value: Decimal,
    pub computed_at: DateTime<Utc>,
}
