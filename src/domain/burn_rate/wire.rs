//! Wire types for the burn rates feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Burn rates per time frame. ETH-side values are wei/minute, USD-side
/// values are USD/minute. Any field may be absent while the backend warms up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnRates {
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_5m: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_5m_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_1h: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_1h_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_24h_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_7d: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_7d_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_30d: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::decimal_flexible_opt::deserialize")]
    pub burn_rate_30d_usd: Option<Decimal>,
}
