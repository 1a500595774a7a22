//! Decimal formatting for labels and tooltips.
//!
//! Rounding is half away from zero, then padded to the requested number of
//! places, so `15.5` with two places reads `15.50`.

use rust_decimal::prelude::*;

/// Format with exactly `decimals` fractional digits.
pub fn fixed(value: &Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.prec$}", rounded, prec = decimals as usize)
}

/// `"{value:.2} Gwei"`.
pub fn gwei(value: &Decimal) -> String {
    format!("{} Gwei", fixed(value, 2))
}

/// Format a fraction as a signed percentage with two decimals.
///
/// `0.0123` → `"+1.23%"`, `-0.0036` → `"-0.36%"`. Zero reads `"+0.00%"`.
pub fn percent_two_decimal_signed(fraction: f64) -> String {
    let rounded = percent_two_decimal(fraction);
    if rounded < 0.0 {
        format!("-{:.2}%", rounded.abs())
    } else {
        format!("+{:.2}%", rounded.abs())
    }
}

/// Millions with two decimals, thousands separated: `1234.5` → `"1,234.50M"`.
pub fn millions(value: f64) -> String {
    let digits = format!("{:.2}", value.abs());
    let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && digits != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}M")
}

/// A fraction as a percentage rounded to two decimals, as displayed.
///
/// Values that display as zero come back as `0.0`, never `-0.0`.
pub fn percent_two_decimal(fraction: f64) -> f64 {
    let rounded = (fraction * 100.0 * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
