//! # ultrasound-core
//!
//! Client-side core of the ultrasound.money dashboard: base fee chart data,
//! supply growth rate and the animated growth gauge.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared**: time frames, wei units, sequence-guarded snapshot slots
//! 2. **Domain**: vertical slices for base fees, burn rates, supply, growth,
//!    chart and gauge
//! 3. **Dashboard**: `Dashboard`, the event-driven store that ties them together
//!
//! Fetching is left to the caller. Payloads are handed over as JSON strings or
//! already-converted snapshots, each tagged with the sequence number assigned
//! when its request was issued.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ultrasound_core::prelude::*;
//!
//! let mut dashboard = Dashboard::new(DashboardConfig::default());
//! dashboard.ingest_json(Feed::BaseFees, 1, &body, Instant::now())?;
//!
//! match dashboard.chart() {
//!     ChartView::Ready(spec) => render(&spec),
//!     ChartView::Unavailable { message, .. } => show(&message),
//!     ChartView::Loading => skeleton(),
//! }
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Crate error types.
pub mod error;

/// Dashboard configuration.
pub mod config;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Layer 3: Dashboard ───────────────────────────────────────────────────────

/// `Dashboard`: the primary entry point.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{IngestOutcome, SnapshotSlot, TimeFrame};

    // Domain types: base fee
    pub use crate::domain::base_fee::{
        select, MultiResolutionSeries, Selection, SeriesPoint, SeriesStore,
    };

    // Domain types: burn rate, supply, growth
    pub use crate::domain::burn_rate::{BurnRate, BurnRateSet};
    pub use crate::domain::growth::{GrowthRateCalculator, GrowthRateSample, GrowthRateTracker};
    pub use crate::domain::supply::SupplySnapshot;

    // Domain types: chart, gauge
    pub use crate::domain::chart::{BarrierLine, ChartSpec, ChartView, Tooltip};
    #[cfg(feature = "clock")]
    pub use crate::domain::gauge::{animate_to_rest, AnimationTicker};
    pub use crate::domain::gauge::{
        AnimationState, BaseGaugeReadout, GaugeAnimation, GaugeReadout, Tone,
    };

    // Config
    pub use crate::config::{DashboardConfig, DashboardConfigBuilder};

    // Dashboard
    pub use crate::dashboard::{Dashboard, DashboardEvent, DashboardUpdate, Feed};

    // Errors
    pub use crate::error::{ConvertError, CoreError};
}
