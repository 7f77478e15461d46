//! # rep-engine — Atomic reputation scoring.
//!
//! Turns a [`WalletActivityData`](rep_core::WalletActivityData) snapshot into
//! an [`AtomicReputationResult`]:
//!
//! 1. Seven category scorers ([`category`]) emit undecayed score items, each
//!    placed on the timeline by a [`TimestampPolicy`](rep_core::TimestampPolicy).
//! 2. Items are concatenated in fixed category order and decayed by an
//!    injected [`DecayEvaluator`](rep_core::DecayEvaluator).
//! 3. The rounded decayed total is classified into a trust level.
//!
//! [`progress`] maps any score onto a tier progress bar, separating the
//! uncapped display score from the capped backend score.
//!
//! The engine is a plain value with no global state; evaluations for
//! different wallets can run concurrently.

pub mod category;
pub mod config;
pub mod engine;
pub mod progress;
pub mod timeline;

pub use config::EngineConfig;
pub use engine::{round_score, AtomicReputationResult, CategoryBreakdown, ReputationEngine};
pub use progress::{level_progress, LevelProgress};
pub use timeline::{synthetic_timestamp, SyntheticTimeline, TxDateTimeline};
