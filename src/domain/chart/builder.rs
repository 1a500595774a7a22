//! Maps a selected series and barrier into a [`ChartSpec`].

use super::{BarrierLine, ChartSpec};
use crate::domain::base_fee::SeriesPoint;
use crate::shared::fmt;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Build the chart description.
///
/// - `min_y` is the lower of `axis_floor` and the smallest value, so the axis
///   never clips data but stays put for flat or sparse series.
/// - `fill_boundary` is `barrier / max` and degenerates to zero when the
///   maximum is zero, the series is empty or there is no barrier.
pub fn build(points: &[SeriesPoint], barrier: Option<Decimal>, axis_floor: Decimal) -> ChartSpec {
    let series_data: Vec<(i64, Decimal)> = points
        .iter()
        .map(|p| (p.timestamp_millis(), p.gwei()))
        .collect();

    let min_y = series_data
        .iter()
        .map(|(_, v)| *v)
        .fold(axis_floor, |acc, v| acc.min(v));

    let max_y = series_data.iter().map(|(_, v)| *v).max();

    let fill_boundary = match (barrier, max_y) {
        (Some(barrier), Some(max)) if max > Decimal::ZERO => barrier.checked_div(max).unwrap_or_default(),
        _ => Decimal::ZERO,
    };

    let tooltip_index: HashMap<i64, Decimal> = series_data.iter().copied().collect();

    ChartSpec {
        barrier_line: barrier.map(|value| BarrierLine {
            value,
            label: fmt::gwei(&value),
        }),
        series_data,
        min_y,
        max_y,
        fill_boundary,
        tooltip_index,
    }
}
