//! Pure conversion module for ether denominations.
//!
//! All math uses `rust_decimal::Decimal` so wei amounts (up to ~7.9e28) are
//! held exactly and divided without a float round-trip.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ConvertError;

/// Wei in one ether (10^18).
pub const WEI_PER_ETH: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Wei in one gwei (10^9).
pub const WEI_PER_GWEI: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Convert a wei amount to ether.
pub fn eth_from_wei(wei: Decimal) -> Decimal {
    wei / WEI_PER_ETH
}

/// Convert a wei amount to gwei.
pub fn gwei_from_wei(wei: Decimal) -> Decimal {
    wei / WEI_PER_GWEI
}

/// Parse a non-negative integer wei amount from its decimal string form.
///
/// Rejects fractions, signs other than none, exponents and empty input.
pub fn parse_wei(input: &str) -> Result<Decimal, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::InvalidWei {
            value: input.to_string(),
            reason: "expected a non-negative integer".to_string(),
        });
    }

    Decimal::from_str(trimmed).map_err(|e| ConvertError::InvalidWei {
        value: input.to_string(),
        reason: e.to_string(),
    })
}

/// Require a decimal to be non-negative.
pub fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, ConvertError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConvertError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}
