//! Supply domain: circulating ETH supply.

pub mod wire;

use crate::error::ConvertError;
use crate::shared::{eth_from_wei, parse_wei};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Circulating supply at the time of the last refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplySnapshot {
    pub eth_supply_wei: Decimal,
}

impl SupplySnapshot {
    pub fn from_wei(eth_supply_wei: Decimal) -> Self {
        Self { eth_supply_wei }
    }

    /// Supply in ETH, exact.
    pub fn eth(&self) -> Decimal {
        eth_from_wei(self.eth_supply_wei)
    }
}

impl TryFrom<wire::Scarcity> for SupplySnapshot {
    type Error = ConvertError;

    fn try_from(raw: wire::Scarcity) -> Result<Self, Self::Error> {
        Ok(Self::from_wei(parse_wei(&raw.eth_supply)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_wire() {
        let raw: wire::Scarcity =
            serde_json::from_str(r#"{"ethSupply": "120521140924371312524847298"}"#).unwrap();
        let supply = SupplySnapshot::try_from(raw).unwrap();
        assert_eq!(
            supply.eth(),
            Decimal::from_str("120521140.924371312524847298").unwrap()
        );
    }

    #[test]
    fn test_rejects_non_integer_supply() {
        let raw = wire::Scarcity {
            eth_supply: "1.2e26".to_string(),
        };
        assert!(SupplySnapshot::try_from(raw).is_err());
    }
}
