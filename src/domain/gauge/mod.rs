//! Gauge domain: animated supply growth, issuance and burn readouts.

pub mod animation;
pub mod base;
#[cfg(feature = "clock")]
pub mod ticker;

use crate::shared::fmt;
use serde::{Deserialize, Serialize};

pub use animation::GaugeAnimation;
pub use base::{base_progress, millions_per_year, BaseGaugeReadout};
#[cfg(feature = "clock")]
pub use ticker::{animate_to_rest, AnimationTicker};

/// Snapshot of a gauge transition handed to the renderer.
///
/// `progress` is already eased, so the displayed value is a straight
/// interpolation between `from` and `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub from: f64,
    pub to: f64,
    pub progress: f64,
    pub settled: bool,
}

impl AnimationState {
    pub fn settled_at(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            progress: 1.0,
            settled: true,
        }
    }

    /// Value to display at this progress.
    pub fn interpolated(&self) -> f64 {
        if self.settled {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress
    }
}

/// Colour family for the gauge text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// Supply shrinking.
    Drop,
    /// Supply growing or flat.
    Fire,
}

impl Tone {
    /// Follows the displayed percentage, so a value that reads `+0.00%` is
    /// never drawn in the shrinking colour.
    pub fn for_value(value: f64) -> Self {
        if fmt::percent_two_decimal(value) < 0.0 {
            Tone::Drop
        } else {
            Tone::Fire
        }
    }
}

/// Needle position in `[-1, 1]` for a growth rate fraction.
///
/// The rate is shown in percent and pinned at ±`max_percent`.
pub fn needle_progress(growth_rate: f64, max_percent: f64) -> f64 {
    if max_percent <= 0.0 {
        return 0.0;
    }
    (growth_rate * 100.0).clamp(-max_percent, max_percent) / max_percent
}

/// Per-tick presentation of the gauge, recomputed from the interpolated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeReadout {
    pub value: f64,
    pub text: String,
    pub tone: Tone,
    pub needle: f64,
}

impl GaugeReadout {
    pub fn from_state(state: &AnimationState, max_percent: f64) -> Self {
        let value = state.interpolated();
        Self {
            value,
            text: fmt::percent_two_decimal_signed(value),
            tone: Tone::for_value(value),
            needle: needle_progress(state.to, max_percent),
        }
    }
}
