//! Conversions from wire types to domain types for base fees.

use super::wire::{BaseFeeAtTime, BaseFeeOverTime};
use super::{is_ascending, MultiResolutionSeries, SeriesPoint};
use crate::error::ConvertError;
use crate::shared::units::non_negative;
use chrono::{DateTime, Utc};

impl TryFrom<BaseFeeAtTime> for SeriesPoint {
    type Error = ConvertError;

    fn try_from(p: BaseFeeAtTime) -> Result<Self, Self::Error> {
        let timestamp = DateTime::parse_from_rfc3339(&p.timestamp)
            .map_err(|e| ConvertError::InvalidTimestamp {
                value: p.timestamp.clone(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);

        if !p.wei.fract().is_zero() {
            return Err(ConvertError::InvalidWei {
                value: p.wei.to_string(),
                reason: "expected an integer".to_string(),
            });
        }

        Ok(Self {
            block_number: p.block_number,
            timestamp,
            wei: non_negative("wei", p.wei)?,
        })
    }
}

fn convert_series(name: &'static str, raw: Vec<BaseFeeAtTime>) -> Result<Vec<SeriesPoint>, ConvertError> {
    let points = raw
        .into_iter()
        .map(SeriesPoint::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if !is_ascending(&points) {
        tracing::warn!(series = name, len = points.len(), "Base fee series is not ascending by timestamp");
    }

    Ok(points)
}

impl TryFrom<BaseFeeOverTime> for MultiResolutionSeries {
    type Error = ConvertError;

    fn try_from(raw: BaseFeeOverTime) -> Result<Self, Self::Error> {
        Ok(Self {
            barrier: non_negative("barrier", raw.barrier)?,
            block_number: raw.block_number,
            m5: convert_series("m5", raw.m5)?,
            h1: convert_series("h1", raw.h1)?,
            d1: convert_series("d1", raw.d1)?,
            d7: convert_series("d7", raw.d7)?,
            d30: convert_series("d30", raw.d30)?,
            all: raw.all.map(|all| convert_series("all", all)).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn raw_point(block_number: u64, timestamp: &str, wei: i64) -> BaseFeeAtTime {
        BaseFeeAtTime {
            block_number,
            timestamp: timestamp.to_string(),
            wei: Decimal::from(wei),
        }
    }

    fn raw_payload(all: Option<Vec<BaseFeeAtTime>>) -> BaseFeeOverTime {
        BaseFeeOverTime {
            barrier: Decimal::new(332, 1),
            block_number: 16_000_000,
            all,
            d1: vec![raw_point(1, "2023-01-01T00:00:00Z", 20_000_000_000)],
            d30: vec![],
            d7: vec![],
            h1: vec![],
            m5: vec![
                raw_point(2, "2023-01-01T00:00:12Z", 21_000_000_000),
                raw_point(3, "2023-01-01T00:00:24+00:00", 22_000_000_000),
            ],
        }
    }

    #[test]
    fn test_point_conversion() {
        let point = SeriesPoint::try_from(raw_point(7, "2023-01-01T00:00:12.500Z", 15_250_000_000)).unwrap();
        assert_eq!(point.block_number, 7);
        assert_eq!(point.timestamp_millis(), 1_672_531_212_500);
        assert_eq!(point.gwei(), Decimal::new(1525, 2));
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let err = SeriesPoint::try_from(raw_point(7, "yesterday", 1)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_rejects_negative_or_fractional_wei() {
        assert!(SeriesPoint::try_from(raw_point(7, "2023-01-01T00:00:00Z", -1)).is_err());
        let mut fractional = raw_point(7, "2023-01-01T00:00:00Z", 1);
        fractional.wei = Decimal::new(15, 1);
        assert!(SeriesPoint::try_from(fractional).is_err());
    }

    #[test]
    fn test_payload_conversion_keeps_null_all() {
        let series = MultiResolutionSeries::try_from(raw_payload(None)).unwrap();
        assert_eq!(series.barrier, Decimal::new(332, 1));
        assert_eq!(series.block_number, 16_000_000);
        assert_eq!(series.m5.len(), 2);
        assert!(series.all.is_none());
    }

    #[test]
    fn test_payload_conversion_with_all() {
        let series = MultiResolutionSeries::try_from(raw_payload(Some(vec![]))).unwrap();
        assert_eq!(series.all, Some(vec![]));
    }

    #[test]
    fn test_unsorted_series_is_kept_as_is() {
        let mut raw = raw_payload(None);
        raw.m5.reverse();
        let series = MultiResolutionSeries::try_from(raw).unwrap();
        assert_eq!(series.m5[0].block_number, 3);
        assert!(!is_ascending(&series.m5));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "barrier": 33.2,
            "block_number": 16000000,
            "all": null,
            "d1": [{"block_number": 1, "timestamp": "2023-01-01T00:00:00Z", "wei": 20000000000}],
            "d30": [], "d7": [], "h1": [],
            "m5": [{"block_number": 2, "timestamp": "2023-01-01T00:00:12Z", "wei": "21000000000"}]
        }"#;
        let raw: BaseFeeOverTime = serde_json::from_str(json).unwrap();
        let series = MultiResolutionSeries::try_from(raw).unwrap();
        assert_eq!(series.m5[0].wei, Decimal::from(21_000_000_000u64));
        assert_eq!(series.d1[0].gwei(), Decimal::from(20));
    }
}
