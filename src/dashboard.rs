//! High-level entry point: `Dashboard`, an event-driven store.
//!
//! All mutation happens through [`Dashboard::handle`] on a single event loop:
//! refresh ticks deliver snapshots, user interaction changes the time frame or
//! issuance mode. Readers get plain derived values (`chart`, `gauge`).

use crate::config::DashboardConfig;
use crate::domain::base_fee::{self, wire::BaseFeeOverTime, MultiResolutionSeries, SeriesStore};
use crate::domain::burn_rate::{wire::BurnRates, BurnRateSet};
use crate::domain::chart::ChartView;
use crate::domain::gauge::{
    millions_per_year, AnimationState, BaseGaugeReadout, GaugeAnimation, GaugeReadout,
};
use crate::domain::growth::{burn_year, GrowthRateCalculator, GrowthRateSample, GrowthRateTracker};
use crate::domain::supply::{wire::Scarcity, SupplySnapshot};
use crate::error::CoreError;
use crate::shared::{IngestOutcome, SnapshotSlot, TimeFrame};

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Instant;

/// The data feeds the dashboard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    BaseFees,
    BurnRates,
    Supply,
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::BaseFees => write!(f, "base_fees"),
            Feed::BurnRates => write!(f, "burn_rates"),
            Feed::Supply => write!(f, "supply"),
        }
    }
}

/// Inputs to the dashboard.
///
/// `seq` orders responses of the same feed: the transport assigns it when the
/// request is issued, so a late response carries a lower number.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    BaseFees { seq: u64, snapshot: MultiResolutionSeries },
    BurnRates { seq: u64, rates: BurnRateSet },
    Supply { seq: u64, supply: SupplySnapshot },
    SelectTimeFrame(TimeFrame),
    /// The time frame indicator was clicked.
    CycleTimeFrame,
    SetSimulateLegacyIssuance(bool),
}

/// What changed as a result of one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardUpdate {
    /// The chart view must be rebuilt.
    pub chart_changed: bool,
    /// A new rounded growth rate was emitted.
    pub growth_rate: Option<GrowthRateSample>,
    /// The previously emitted growth rate no longer applies to the current
    /// inputs; readers must show it as unavailable.
    pub growth_rate_unavailable: bool,
    /// The event was an out-of-order snapshot and was dropped.
    pub stale: bool,
}

pub struct Dashboard {
    config: DashboardConfig,
    base_fees: SeriesStore,
    burn_rates: SnapshotSlot<BurnRateSet>,
    supply: SnapshotSlot<SupplySnapshot>,
    time_frame: TimeFrame,
    simulate_legacy_issuance: bool,
    growth: GrowthRateTracker,
    gauge: GaugeAnimation,
    issuance_gauge: GaugeAnimation,
    burn_gauge: GaugeAnimation,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let growth = GrowthRateTracker::new(GrowthRateCalculator::from_config(&config));
        let gauge = GaugeAnimation::new(0.0, config.animation.duration);
        let issuance_gauge = GaugeAnimation::new(0.0, config.animation.duration);
        let burn_gauge = GaugeAnimation::new(0.0, config.animation.duration);
        Self {
            config,
            base_fees: SeriesStore::new(),
            burn_rates: SnapshotSlot::new(),
            supply: SnapshotSlot::new(),
            time_frame: TimeFrame::default(),
            simulate_legacy_issuance: false,
            growth,
            gauge,
            issuance_gauge,
            burn_gauge,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ── Write side ───────────────────────────────────────────────────────

    /// Apply one event, stamping any new growth rate with the current time.
    pub fn handle(&mut self, event: DashboardEvent, now: Instant) -> DashboardUpdate {
        self.handle_at(event, now, Utc::now())
    }

    /// Apply one event. `now` drives the gauge animation clock and
    /// `computed_at` stamps a newly emitted growth rate.
    pub fn handle_at(
        &mut self,
        event: DashboardEvent,
        now: Instant,
        computed_at: DateTime<Utc>,
    ) -> DashboardUpdate {
        let mut update = DashboardUpdate::default();

        // Whether the growth rate inputs changed.
        let growth_inputs_changed = match event {
            DashboardEvent::BaseFees { seq, snapshot } => {
                let outcome = self.base_fees.ingest(seq, snapshot);
                update.stale = !outcome.is_applied();
                update.chart_changed = outcome.is_applied();
                false
            }
            DashboardEvent::BurnRates { seq, rates } => {
                let outcome = self.burn_rates.offer(seq, rates);
                log_outcome(Feed::BurnRates, seq, outcome);
                update.stale = !outcome.is_applied();
                outcome.is_applied()
            }
            DashboardEvent::Supply { seq, supply } => {
                let outcome = self.supply.offer(seq, supply);
                log_outcome(Feed::Supply, seq, outcome);
                update.stale = !outcome.is_applied();
                outcome.is_applied()
            }
            DashboardEvent::SelectTimeFrame(time_frame) => {
                update.chart_changed = self.set_time_frame(time_frame);
                update.chart_changed
            }
            DashboardEvent::CycleTimeFrame => {
                update.chart_changed = self.set_time_frame(self.time_frame.next());
                update.chart_changed
            }
            DashboardEvent::SetSimulateLegacyIssuance(simulate) => {
                let changed = self.simulate_legacy_issuance != simulate;
                self.simulate_legacy_issuance = simulate;
                changed
            }
        };

        if growth_inputs_changed {
            let had_rate = self.growth.current().is_some();
            update.growth_rate = self.recompute_growth(now, computed_at);
            update.growth_rate_unavailable = had_rate && self.growth.current().is_none();
            self.retarget_base_gauges(now);
        }

        update
    }

    /// Parse a raw payload for `feed` and apply it.
    ///
    /// A payload that fails to parse leaves the previous snapshot in place.
    pub fn ingest_json(
        &mut self,
        feed: Feed,
        seq: u64,
        body: &str,
        now: Instant,
    ) -> Result<DashboardUpdate, CoreError> {
        self.ingest_json_at(feed, seq, body, now, Utc::now())
    }

    /// [`Dashboard::ingest_json`] with an explicit growth rate timestamp.
    pub fn ingest_json_at(
        &mut self,
        feed: Feed,
        seq: u64,
        body: &str,
        now: Instant,
        computed_at: DateTime<Utc>,
    ) -> Result<DashboardUpdate, CoreError> {
        let event = parse_feed(feed, seq, body).inspect_err(|e| {
            tracing::warn!(%feed, seq, error = %e, "Failed to parse payload, keeping previous snapshot");
        })?;
        Ok(self.handle_at(event, now, computed_at))
    }

    // ── Read side ────────────────────────────────────────────────────────

    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    pub fn simulate_legacy_issuance(&self) -> bool {
        self.simulate_legacy_issuance
    }

    pub fn base_fees(&self) -> Option<&MultiResolutionSeries> {
        self.base_fees.current()
    }

    pub fn burn_rates(&self) -> Option<&BurnRateSet> {
        self.burn_rates.current()
    }

    pub fn supply(&self) -> Option<&SupplySnapshot> {
        self.supply.current()
    }

    /// Chart for the selected time frame.
    pub fn chart(&self) -> ChartView {
        match self.base_fees.current() {
            None => ChartView::Loading,
            Some(snapshot) => ChartView::from_selection(
                base_fee::select(snapshot, self.time_frame),
                self.config.chart.axis_floor,
            ),
        }
    }

    pub fn growth_rate(&self) -> Option<&GrowthRateSample> {
        self.growth.current()
    }

    /// Advance the gauge animation to `now`.
    pub fn gauge(&mut self, now: Instant) -> AnimationState {
        self.gauge.tick(now)
    }

    /// Gauge presentation for a state returned by [`Dashboard::gauge`].
    ///
    /// `None` until a growth rate exists, so the renderer can show a skeleton.
    pub fn gauge_readout(&self, state: &AnimationState) -> Option<GaugeReadout> {
        self.growth.current()?;
        let max_percent = self.config.gauge.max_percent.to_f64().unwrap_or(5.0);
        Some(GaugeReadout::from_state(state, max_percent))
    }

    pub fn gauge_animation(&mut self) -> &mut GaugeAnimation {
        &mut self.gauge
    }

    /// Advance the issuance gauge to `now`. The first call counts up from zero.
    pub fn issuance_gauge(&mut self, now: Instant) -> AnimationState {
        if let Some(target) = self.issuance_millions().to_f64() {
            self.issuance_gauge.retarget(target, now);
        }
        self.issuance_gauge.tick(now)
    }

    pub fn issuance_gauge_readout(&self, state: &AnimationState) -> BaseGaugeReadout {
        self.base_readout(state)
    }

    /// Advance the burn gauge to `now`.
    pub fn burn_gauge(&mut self, now: Instant) -> AnimationState {
        self.burn_gauge.tick(now)
    }

    /// `None` while the selected time frame has no burn rate.
    pub fn burn_gauge_readout(&self, state: &AnimationState) -> Option<BaseGaugeReadout> {
        self.burn_millions()?;
        Some(self.base_readout(state))
    }

    /// Issuance in millions of ETH/year for the current issuance mode.
    pub fn issuance_millions(&self) -> Decimal {
        millions_per_year(self.config.issuance.issuance_year(self.simulate_legacy_issuance))
    }

    /// Burn in millions of ETH/year at the selected time frame's rate.
    pub fn burn_millions(&self) -> Option<Decimal> {
        let burn = burn_year(self.burn_rates.current()?, self.time_frame)?;
        Some(millions_per_year(burn))
    }

    pub fn time_frame_label(&self, now: DateTime<Utc>) -> String {
        self.time_frame
            .indicator_label(now, self.config.london_hard_fork)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn set_time_frame(&mut self, time_frame: TimeFrame) -> bool {
        let changed = self.time_frame != time_frame;
        self.time_frame = time_frame;
        changed
    }

    fn recompute_growth(
        &mut self,
        now: Instant,
        computed_at: DateTime<Utc>,
    ) -> Option<GrowthRateSample> {
        let sample = self.growth.update(
            self.burn_rates.current(),
            self.time_frame,
            self.simulate_legacy_issuance,
            self.supply.current(),
            computed_at,
        )?;

        match sample.value.to_f64() {
            Some(target) => self.gauge.retarget(target, now),
            None => tracing::warn!(value = %sample.value, "Growth rate not representable as f64"),
        }
        Some(sample)
    }

    fn retarget_base_gauges(&mut self, now: Instant) {
        if let Some(target) = self.issuance_millions().to_f64() {
            self.issuance_gauge.retarget(target, now);
        }
        if let Some(target) = self.burn_millions().and_then(|burn| burn.to_f64()) {
            self.burn_gauge.retarget(target, now);
        }
    }

    fn base_readout(&self, state: &AnimationState) -> BaseGaugeReadout {
        let gauge = &self.config.gauge;
        BaseGaugeReadout::from_state(
            state,
            gauge.base_min.to_f64().unwrap_or(0.0),
            gauge.base_max.to_f64().unwrap_or(12.0),
        )
    }
}

fn log_outcome(feed: Feed, seq: u64, outcome: IngestOutcome) {
    match outcome {
        IngestOutcome::Applied => tracing::debug!(%feed, seq, "Applied snapshot"),
        IngestOutcome::Stale { held_seq } => {
            tracing::debug!(%feed, seq, held_seq, "Dropped stale snapshot")
        }
    }
}

fn parse_feed(feed: Feed, seq: u64, body: &str) -> Result<DashboardEvent, CoreError> {
    let event = match feed {
        Feed::BaseFees => {
            let raw: BaseFeeOverTime = serde_json::from_str(body)?;
            DashboardEvent::BaseFees {
                seq,
                snapshot: raw.try_into()?,
            }
        }
        Feed::BurnRates => {
            let raw: BurnRates = serde_json::from_str(body)?;
            DashboardEvent::BurnRates {
                seq,
                rates: raw.try_into()?,
            }
        }
        Feed::Supply => {
            let raw: Scarcity = serde_json::from_str(body)?;
            DashboardEvent::Supply {
                seq,
                supply: raw.try_into()?,
            }
        }
    };
    Ok(event)
}
