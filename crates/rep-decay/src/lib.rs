//! # rep-decay — Age-based decay of reputation score items.
//!
//! Positive score items lose value as they age, in four steps:
//! - **Fresh** (≤ 30 days): full value
//! - **Recent** (≤ 90 days): 90%
//! - **Aging** (≤ 180 days): 70%
//! - **Stale** (> 180 days): 50%
//!
//! Penalties (items with `points <= 0`) never decay. This crate is the only
//! place decay is applied; category scorers emit undecayed items.

pub mod engine;

pub use engine::{age_days, StepDecay};
