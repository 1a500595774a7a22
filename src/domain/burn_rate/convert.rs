//! Conversions from wire types to domain types for burn rates.

use super::wire::BurnRates;
use super::{BurnRate, BurnRateSet};
use crate::error::ConvertError;
use crate::shared::units::non_negative;
use crate::shared::{eth_from_wei, TimeFrame};
use rust_decimal::Decimal;

fn pair(
    time_frame: TimeFrame,
    wei_per_min: Option<Decimal>,
    usd_per_min: Option<Decimal>,
) -> Result<Option<(TimeFrame, BurnRate)>, ConvertError> {
    let Some(wei) = wei_per_min else {
        return Ok(None);
    };
    let eth = eth_from_wei(non_negative("burn rate", wei)?);
    let usd = non_negative("burn rate usd", usd_per_min.unwrap_or_default())?;
    Ok(Some((time_frame, BurnRate { eth, usd })))
}

impl TryFrom<BurnRates> for BurnRateSet {
    type Error = ConvertError;

    fn try_from(raw: BurnRates) -> Result<Self, Self::Error> {
        let entries = [
            pair(TimeFrame::Minute5, raw.burn_rate_5m, raw.burn_rate_5m_usd)?,
            pair(TimeFrame::Hour1, raw.burn_rate_1h, raw.burn_rate_1h_usd)?,
            pair(TimeFrame::Day1, raw.burn_rate_24h, raw.burn_rate_24h_usd)?,
            pair(TimeFrame::Day7, raw.burn_rate_7d, raw.burn_rate_7d_usd)?,
            pair(TimeFrame::Day30, raw.burn_rate_30d, raw.burn_rate_30d_usd)?,
        ];
        Ok(entries.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_wei_per_minute_becomes_eth_per_minute() {
        let raw = BurnRates {
            burn_rate_1h: Some(dec("2000000000000000000")),
            burn_rate_1h_usd: Some(dec("3100.5")),
            ..Default::default()
        };
        let set = BurnRateSet::try_from(raw).unwrap();
        let rate = set.get(TimeFrame::Hour1).unwrap();
        assert_eq!(rate.eth, dec("2"));
        assert_eq!(rate.usd, dec("3100.5"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_missing_usd_defaults_to_zero() {
        let raw = BurnRates {
            burn_rate_5m: Some(dec("500000000000000000")),
            ..Default::default()
        };
        let set = BurnRateSet::try_from(raw).unwrap();
        assert_eq!(set.get(TimeFrame::Minute5).unwrap().usd, Decimal::ZERO);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let raw = BurnRates {
            burn_rate_7d: Some(dec("-1")),
            ..Default::default()
        };
        assert!(matches!(
            BurnRateSet::try_from(raw),
            Err(ConvertError::Negative { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "burnRate5m": 1500000000000000000, "burnRate5mUsd": 2400.0,
            "burnRate24h": "3000000000000000000", "burnRate24hUsd": 4800
        }"#;
        let raw: BurnRates = serde_json::from_str(json).unwrap();
        let set = BurnRateSet::try_from(raw).unwrap();
        assert_eq!(set.get(TimeFrame::Minute5).unwrap().eth, dec("1.5"));
        assert_eq!(set.get(TimeFrame::Day1).unwrap().eth, dec("3"));
        assert!(set.get(TimeFrame::Day30).is_none());
    }
}
