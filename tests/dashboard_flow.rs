//! End-to-end dashboard flow over JSON payloads.
//!
//! Payloads are shaped like the backend's responses; sequence numbers stand in
//! for the order in which requests were issued.

use std::str::FromStr;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use serde_json::json;

use ultrasound_core::prelude::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn point(block_number: u64, timestamp: &str, wei: serde_json::Value) -> serde_json::Value {
    json!({ "block_number": block_number, "timestamp": timestamp, "wei": wei })
}

fn base_fees_body(block_number: u64, all: serde_json::Value) -> String {
    json!({
        "barrier": "33.2",
        "block_number": block_number,
        "all": all,
        "d1": [
            point(100, "2023-01-01T00:00:00Z", json!(21_000_000_000u64)),
            point(101, "2023-01-01T00:00:12Z", json!("14000000000")),
            point(102, "2023-01-01T00:00:24Z", json!(40_000_000_000u64)),
        ],
        "d30": [],
        "d7": [],
        "h1": [point(90, "2023-01-01T00:00:00Z", json!(9_000_000_000u64))],
        "m5": [],
    })
    .to_string()
}

fn burn_rates_body(wei_per_min: u64) -> String {
    json!({
        "burnRate5m": wei_per_min,
        "burnRate5mUsd": 3200.5,
        "burnRate1h": wei_per_min,
        "burnRate24h": wei_per_min,
        "burnRate24hUsd": "3100",
        "burnRate7d": wei_per_min,
        "burnRate30d": wei_per_min,
    })
    .to_string()
}

const SUPPLY_BODY: &str = r#"{"ethSupply":"120000000000000000000000000"}"#;

#[test]
fn chart_follows_snapshots_and_time_frame() {
    let now = Instant::now();
    let mut dashboard = Dashboard::new(DashboardConfig::default());
    assert_eq!(dashboard.chart(), ChartView::Loading);

    let update = dashboard
        .ingest_json(Feed::BaseFees, 1, &base_fees_body(102, json!(null)), now)
        .unwrap();
    assert!(update.chart_changed);

    let view = dashboard.chart();
    let spec = view.spec().expect("24h series is present");
    assert_eq!(spec.series_data.len(), 3);
    assert_eq!(spec.min_y, Decimal::from(14));
    assert_eq!(spec.max_y, Some(Decimal::from(40)));
    assert_eq!(spec.barrier_line.as_ref().unwrap().label, "33.20 Gwei");
    assert_eq!(spec.fill_boundary, dec("33.2") / Decimal::from(40));

    let ts = spec.series_data[1].0;
    let tooltip = spec.tooltip(ts).unwrap();
    assert_eq!(tooltip.value, "14.00 Gwei");
    assert_eq!(spec.tooltip_value(ts), Some(Decimal::from(14)));
    assert_eq!(tooltip.date, "Jan 1, 12:00:12AM");

    dashboard.handle(DashboardEvent::SelectTimeFrame(TimeFrame::All), now);
    assert!(matches!(
        dashboard.chart(),
        ChartView::Unavailable {
            time_frame: TimeFrame::All,
            ..
        }
    ));

    let update = dashboard
        .ingest_json(
            Feed::BaseFees,
            2,
            &base_fees_body(103, json!([point(1, "2021-08-05T12:33:42Z", json!(1))])),
            now,
        )
        .unwrap();
    assert!(update.chart_changed);
    assert_eq!(dashboard.chart().spec().unwrap().series_data.len(), 1);
}

#[test]
fn late_response_does_not_overwrite_newer_one() {
    let now = Instant::now();
    let mut dashboard = Dashboard::new(DashboardConfig::default());

    dashboard
        .ingest_json(Feed::BaseFees, 6, &base_fees_body(600, json!(null)), now)
        .unwrap();
    let update = dashboard
        .ingest_json(Feed::BaseFees, 5, &base_fees_body(500, json!(null)), now)
        .unwrap();

    assert!(update.stale);
    assert_eq!(dashboard.base_fees().unwrap().block_number, 600);

    dashboard
        .ingest_json(Feed::BurnRates, 3, &burn_rates_body(2_000_000_000_000_000_000), now)
        .unwrap();
    let update = dashboard
        .ingest_json(Feed::BurnRates, 2, &burn_rates_body(0), now)
        .unwrap();
    assert!(update.stale);
    assert_eq!(
        dashboard.burn_rates().unwrap().get(TimeFrame::Day1).unwrap().eth,
        Decimal::from(2)
    );
}

#[test]
fn growth_rate_emits_once_per_distinct_value() {
    let t0 = Instant::now();
    let mut dashboard = Dashboard::new(DashboardConfig::default());

    let update = dashboard
        .ingest_json(Feed::BurnRates, 1, &burn_rates_body(2_000_000_000_000_000_000), t0)
        .unwrap();
    assert_eq!(update.growth_rate, None);

    let update = dashboard.ingest_json(Feed::Supply, 1, SUPPLY_BODY, t0).unwrap();
    assert_eq!(update.growth_rate.unwrap().value, dec("-0.0036"));

    // Same inputs on the next refresh: nothing new to animate.
    let update = dashboard.ingest_json(Feed::Supply, 2, SUPPLY_BODY, t0).unwrap();
    assert_eq!(update.growth_rate, None);

    // Every time frame burns at the same rate in this payload.
    let update = dashboard.handle(DashboardEvent::SelectTimeFrame(TimeFrame::Day7), t0);
    assert_eq!(update.growth_rate, None);

    let settled = dashboard.gauge(t0 + Duration::from_secs(2));
    assert!(settled.settled);
    let readout = dashboard.gauge_readout(&settled).unwrap();
    assert_eq!(readout.tone, Tone::Drop);
    assert_eq!(readout.text, "-0.36%");
}

#[test]
fn config_from_json_drives_dashboard() {
    let config = DashboardConfig::from_json(
        r#"{
            "growth_rate_decimals": 2,
            "chart": { "axis_floor": "10" }
        }"#,
    )
    .unwrap();
    assert_eq!(config.growth_rate_decimals, 2);

    let now = Instant::now();
    let mut dashboard = Dashboard::new(config);
    dashboard
        .ingest_json(Feed::BurnRates, 1, &burn_rates_body(2_000_000_000_000_000_000), now)
        .unwrap();
    let update = dashboard.ingest_json(Feed::Supply, 1, SUPPLY_BODY, now).unwrap();
    // -0.0036 rounds to zero at two places.
    assert!(update.growth_rate.unwrap().value.is_zero());
}

#[test]
fn invalid_payloads_are_reported() {
    let now = Instant::now();
    let mut dashboard = Dashboard::new(DashboardConfig::default());

    let bad_timestamp = json!({
        "barrier": 30,
        "block_number": 1,
        "all": null,
        "d1": [point(1, "yesterday", json!(1))],
        "d30": [], "d7": [], "h1": [], "m5": [],
    })
    .to_string();
    let err = dashboard
        .ingest_json(Feed::BaseFees, 1, &bad_timestamp, now)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Convert(ConvertError::InvalidTimestamp { .. })
    ));

    let err = dashboard
        .ingest_json(Feed::Supply, 1, r#"{"ethSupply":"-1"}"#, now)
        .unwrap_err();
    assert!(matches!(err, CoreError::Convert(ConvertError::InvalidWei { .. })));

    assert_eq!(dashboard.chart(), ChartView::Loading);
    assert!(dashboard.supply().is_none());
}

#[test]
fn unbounded_frame_clears_growth_rate_and_burn_gauge() {
    let t0 = Instant::now();
    let mut dashboard = Dashboard::new(DashboardConfig::default());
    dashboard
        .ingest_json(Feed::BurnRates, 1, &burn_rates_body(2_000_000_000_000_000_000), t0)
        .unwrap();
    dashboard.ingest_json(Feed::Supply, 1, SUPPLY_BODY, t0).unwrap();
    assert!(dashboard.growth_rate().is_some());

    let update = dashboard.handle(DashboardEvent::SelectTimeFrame(TimeFrame::All), t0);
    assert!(update.growth_rate_unavailable);
    assert!(dashboard.growth_rate().is_none());

    let t1 = t0 + Duration::from_secs(2);
    let gauge = dashboard.gauge(t1);
    assert_eq!(dashboard.gauge_readout(&gauge), None);
    let burn = dashboard.burn_gauge(t1);
    assert_eq!(dashboard.burn_gauge_readout(&burn), None);

    // Issuance does not depend on the time frame.
    let issuance = dashboard.issuance_gauge(t1);
    assert_eq!(dashboard.issuance_gauge_readout(&issuance).text, "0.62M");
}
