//! Process-wide, read-only dashboard configuration.
//!
//! Issuance constants, the London hard fork date and the animation and chart
//! tuning live here rather than as module-level constants, so a calculator
//! can be exercised against any set of figures.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;

/// Annual issuance figures in ETH/year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuanceConfig {
    /// Issuance under the current consensus.
    pub pos_issuance_year: Decimal,
    /// Issuance had proof-of-work continued.
    pub pow_issuance_year: Decimal,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            pos_issuance_year: Decimal::from(620_000),
            pow_issuance_year: Decimal::from(4_900_000),
        }
    }
}

impl IssuanceConfig {
    pub fn issuance_year(&self, simulate_legacy_issuance: bool) -> Decimal {
        if simulate_legacy_issuance {
            self.pow_issuance_year
        } else {
            self.pos_issuance_year
        }
    }
}

/// Gauge value transition timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    #[serde(with = "duration_ms")]
    pub tick_interval: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            tick_interval: Duration::from_millis(16),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Lowest y-axis value shown unless the data dips below it (Gwei).
    pub axis_floor: Decimal,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            axis_floor: Decimal::from(15),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Growth rate percentage at which the needle pins to either end.
    pub max_percent: Decimal,
    /// Issuance and burn gauge scale, millions of ETH/year.
    pub base_min: Decimal,
    pub base_max: Decimal,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max_percent: Decimal::from(5),
            base_min: Decimal::ZERO,
            base_max: Decimal::from(12),
        }
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub issuance: IssuanceConfig,
    pub london_hard_fork: DateTime<Utc>,
    #[serde(with = "duration_ms")]
    pub refresh_interval: Duration,
    pub animation: AnimationConfig,
    pub chart: ChartConfig,
    pub gauge: GaugeConfig,
    pub growth_rate_decimals: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            issuance: IssuanceConfig::default(),
            london_hard_fork: london_hard_fork(),
            refresh_interval: Duration::from_secs(4),
            animation: AnimationConfig::default(),
            chart: ChartConfig::default(),
            gauge: GaugeConfig::default(),
            growth_rate_decimals: 4,
        }
    }
}

impl DashboardConfig {
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.issuance.pos_issuance_year.is_sign_negative()
            || self.issuance.pow_issuance_year.is_sign_negative()
        {
            return Err(CoreError::Config("issuance must be non-negative".into()));
        }
        if self.refresh_interval.is_zero() {
            return Err(CoreError::Config("refresh_interval must be positive".into()));
        }
        if self.animation.duration.is_zero() || self.animation.tick_interval.is_zero() {
            return Err(CoreError::Config("animation timings must be positive".into()));
        }
        if self.animation.tick_interval > self.animation.duration {
            return Err(CoreError::Config(
                "animation tick_interval must not exceed its duration".into(),
            ));
        }
        if self.chart.axis_floor.is_sign_negative() {
            return Err(CoreError::Config("axis_floor must be non-negative".into()));
        }
        if self.gauge.max_percent <= Decimal::ZERO {
            return Err(CoreError::Config("gauge max_percent must be positive".into()));
        }
        if self.gauge.base_max <= self.gauge.base_min {
            return Err(CoreError::Config("gauge base_max must exceed base_min".into()));
        }
        if self.growth_rate_decimals > 10 {
            return Err(CoreError::Config("growth_rate_decimals must be at most 10".into()));
        }
        Ok(())
    }
}

/// Block 12,965,000.
fn london_hard_fork() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 8, 5, 12, 33, 42)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

// ─── Builder ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    pub fn pos_issuance_year(mut self, eth_per_year: Decimal) -> Self {
        self.config.issuance.pos_issuance_year = eth_per_year;
        self
    }

    pub fn pow_issuance_year(mut self, eth_per_year: Decimal) -> Self {
        self.config.issuance.pow_issuance_year = eth_per_year;
        self
    }

    pub fn london_hard_fork(mut self, at: DateTime<Utc>) -> Self {
        self.config.london_hard_fork = at;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.config.animation.duration = duration;
        self
    }

    pub fn animation_tick_interval(mut self, interval: Duration) -> Self {
        self.config.animation.tick_interval = interval;
        self
    }

    pub fn axis_floor(mut self, gwei: Decimal) -> Self {
        self.config.chart.axis_floor = gwei;
        self
    }

    pub fn gauge_max_percent(mut self, percent: Decimal) -> Self {
        self.config.gauge.max_percent = percent;
        self
    }

    pub fn base_gauge_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.config.gauge.base_min = min;
        self.config.gauge.base_max = max;
        self
    }

    pub fn growth_rate_decimals(mut self, decimals: u32) -> Self {
        self.config.growth_rate_decimals = decimals;
        self
    }

    pub fn build(self) -> Result<DashboardConfig, CoreError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
