//! Supply growth rate calculation.
//!
//! ```text
//! burn_year   = burn_eth_per_min × 60 × 24 × 365.25
//! growth_rate = (issuance_year − burn_year) / supply_eth
//! ```
//!
//! The result is rounded half up to a fixed number of places (4 by default)
//! so that sub-basis-point noise does not restart the gauge animation.

use super::GrowthRateSample;
use crate::config::{DashboardConfig, IssuanceConfig};
use crate::domain::burn_rate::BurnRateSet;
use crate::domain::supply::SupplySnapshot;
use crate::shared::TimeFrame;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;

/// 60 × 24 × 365.25. Leap years are folded in as a quarter day per year.
pub const MINUTES_PER_YEAR: Decimal = Decimal::from_parts(525_960, 0, 0, false, 0);

/// Pure growth rate computation over an immutable issuance configuration.
#[derive(Debug, Clone)]
pub struct GrowthRateCalculator {
    issuance: IssuanceConfig,
    decimals: u32,
}

impl GrowthRateCalculator {
    pub fn new(issuance: IssuanceConfig, decimals: u32) -> Self {
        Self { issuance, decimals }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.issuance.clone(), config.growth_rate_decimals)
    }

    /// Rounded annual growth rate, or `None` while any input is missing.
    ///
    /// A zero supply is treated as missing rather than dividing by it.
    pub fn compute(
        &self,
        burn_rates: Option<&BurnRateSet>,
        time_frame: TimeFrame,
        simulate_legacy_issuance: bool,
        supply: Option<&SupplySnapshot>,
    ) -> Option<Decimal> {
        let burn_year = burn_year(burn_rates?, time_frame)?;
        let supply_eth = supply?.eth();
        if supply_eth.is_zero() {
            return None;
        }

        let issuance_year = self.issuance.issuance_year(simulate_legacy_issuance);
        let growth_rate = issuance_year.checked_sub(burn_year)?.checked_div(supply_eth)?;

        Some(round_half_up(growth_rate, self.decimals))
    }
}

/// ETH burned per year at the sampled rate for `time_frame`.
pub fn burn_year(burn_rates: &BurnRateSet, time_frame: TimeFrame) -> Option<Decimal> {
    burn_rates
        .get(time_frame)?
        .eth
        .checked_mul(MINUTES_PER_YEAR)
}

/// Round to `decimals` places with ties going toward positive infinity.
///
/// `-0.00005` becomes `0`, `0.00005` becomes `0.0001`.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(decimals, strategy);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Remembers the last emitted growth rate and suppresses repeats.
///
/// An update is emitted only when the rounded value differs from the last
/// emitted one. When the inputs no longer yield a rate (the selected frame
/// has no burn rate, or supply is zero) the last emission is dropped, so
/// `current` never reports a rate computed from other inputs.
#[derive(Debug, Clone)]
pub struct GrowthRateTracker {
    calculator: GrowthRateCalculator,
    last: Option<GrowthRateSample>,
}

impl GrowthRateTracker {
    pub fn new(calculator: GrowthRateCalculator) -> Self {
        Self {
            calculator,
            last: None,
        }
    }

    /// Recompute and return the new sample if it changed.
    pub fn update(
        &mut self,
        burn_rates: Option<&BurnRateSet>,
        time_frame: TimeFrame,
        simulate_legacy_issuance: bool,
        supply: Option<&SupplySnapshot>,
        computed_at: DateTime<Utc>,
    ) -> Option<GrowthRateSample> {
        let Some(value) = self
            .calculator
            .compute(burn_rates, time_frame, simulate_legacy_issuance, supply)
        else {
            if let Some(last) = self.last.take() {
                tracing::debug!(last = %last.value, %time_frame, "Growth rate unavailable");
            }
            return None;
        };

        if self.last.is_some_and(|last| last.value == value) {
            tracing::trace!(%value, %time_frame, "Growth rate unchanged after rounding");
            return None;
        }

        let sample = GrowthRateSample { value, computed_at };
        tracing::debug!(%value, %time_frame, simulate_legacy_issuance, "Growth rate changed");
        self.last = Some(sample);
        Some(sample)
    }

    pub fn current(&self) -> Option<&GrowthRateSample> {
        self.last.as_ref()
    }
}
