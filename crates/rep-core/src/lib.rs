//! # rep-core
//! Foundation types and traits for atomic reputation scoring.
//!
//! Everything in this crate is pure data: wallet activity input, score items,
//! the trust-tier threshold table, and the trait seams the scoring engine is
//! assembled from. No IO, no global state.

pub mod constants;
pub mod error;
pub mod tier;
pub mod traits;
pub mod types;

pub use error::{ConfigError, RepError};
pub use tier::{TrustBand, TrustLevel, TrustThresholds};
pub use traits::{DecayEvaluator, TimestampPolicy};
pub use types::{ScoreAction, ScoreCategory, ScoreItem, WalletActivityData};
