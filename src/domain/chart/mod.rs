//! Chart domain: renderer-agnostic description of the base fee chart.

pub mod builder;

use crate::domain::base_fee::Selection;
use crate::shared::{fmt, TimeFrame};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use builder::build;

/// Horizontal reference line at the barrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierLine {
    /// Gwei.
    pub value: Decimal,
    pub label: String,
}

/// Formatted tooltip content for one point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// UTC, e.g. `"Jan 1, 12:00:12AM"`.
    pub date: String,
    /// e.g. `"21.00 Gwei"`.
    pub value: String,
}

/// Everything the renderer needs to draw the base fee chart.
///
/// Values are in Gwei, x-values are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub series_data: Vec<(i64, Decimal)>,
    /// `None` when no barrier is known; never drawn at zero.
    pub barrier_line: Option<BarrierLine>,
    pub min_y: Decimal,
    pub max_y: Option<Decimal>,
    /// Position of the fill gradient split, `barrier / max_y`.
    pub fill_boundary: Decimal,
    pub tooltip_index: HashMap<i64, Decimal>,
}

impl ChartSpec {
    /// Exact-match lookup; no interpolation between points.
    pub fn tooltip_value(&self, timestamp_ms: i64) -> Option<Decimal> {
        self.tooltip_index.get(&timestamp_ms).copied()
    }

    pub fn tooltip(&self, timestamp_ms: i64) -> Option<Tooltip> {
        let value = self.tooltip_value(timestamp_ms)?;
        let date = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)?;
        Some(Tooltip {
            date: date.format("%b %-d, %I:%M:%S%p").to_string(),
            value: fmt::gwei(&value),
        })
    }
}

/// What the chart widget should show for the selected time frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartView {
    /// No base fee snapshot has arrived yet.
    Loading,
    /// The snapshot exists but lacks this time frame's series.
    Unavailable { time_frame: TimeFrame, message: String },
    Ready(ChartSpec),
}

impl ChartView {
    pub fn from_selection(selection: Selection<'_>, axis_floor: Decimal) -> Self {
        match selection {
            Selection::Available { points, barrier } => {
                ChartView::Ready(build(points, Some(barrier), axis_floor))
            }
            Selection::Unavailable { time_frame } => ChartView::Unavailable {
                time_frame,
                message: format!("{} time frame not yet available", time_frame.display_label()),
            },
        }
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartView::Ready(spec) => Some(spec),
            _ => None,
        }
    }
}
