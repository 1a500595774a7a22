//! Human-readable formatting for chart labels, tooltips and gauge text.

pub mod decimal;

pub use decimal::{fixed, gwei, millions, percent_two_decimal, percent_two_decimal_signed};
