//! Issuance and burn gauges: yearly ETH, in millions, on a fixed scale.

use super::AnimationState;
use crate::shared::fmt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// ETH/year expressed in millions of ETH.
pub fn millions_per_year(eth_per_year: Decimal) -> Decimal {
    eth_per_year / MILLION
}

/// Fill fraction in `[0, 1]` for `value` on the `[min, max]` scale.
pub fn base_progress(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Per-tick presentation of an issuance or burn gauge.
///
/// The text counts up with the interpolated value; the fill jumps to the
/// target, like the growth gauge's needle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseGaugeReadout {
    /// Millions of ETH per year.
    pub value: f64,
    /// e.g. `"3.42M"`.
    pub text: String,
    pub progress: f64,
}

impl BaseGaugeReadout {
    pub fn from_state(state: &AnimationState, min: f64, max: f64) -> Self {
        let value = state.interpolated();
        Self {
            value,
            text: fmt::millions(value),
            progress: base_progress(state.to, min, max),
        }
    }
}
