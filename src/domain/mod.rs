//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains (where applicable):
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend payloads
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `state.rs`: State containers with update methods (for refresh-driven data)

pub mod base_fee;
pub mod burn_rate;
pub mod chart;
pub mod gauge;
pub mod growth;
pub mod supply;
