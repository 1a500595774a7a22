//! Time frame selection over a base fee snapshot.

use super::{MultiResolutionSeries, SeriesPoint};
use crate::shared::TimeFrame;
use rust_decimal::Decimal;

/// Series chosen for a time frame.
///
/// `Unavailable` is distinct from an empty series: the renderer shows a
/// "not yet available" message instead of an empty chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Available {
        points: &'a [SeriesPoint],
        barrier: Decimal,
    },
    Unavailable {
        time_frame: TimeFrame,
    },
}

impl<'a> Selection<'a> {
    pub fn points(&self) -> Option<&'a [SeriesPoint]> {
        match self {
            Selection::Available { points, .. } => Some(points),
            Selection::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Selection::Available { .. })
    }
}

/// Pick the series for `time_frame`. Points are returned in upstream order.
///
/// The barrier always comes from the snapshot root; one threshold applies to
/// every resolution.
pub fn select(snapshot: &MultiResolutionSeries, time_frame: TimeFrame) -> Selection<'_> {
    match snapshot.series(time_frame) {
        Some(points) => Selection::Available {
            points,
            barrier: snapshot.barrier,
        },
        None => Selection::Unavailable { time_frame },
    }
}
