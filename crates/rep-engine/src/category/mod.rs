//! The seven category scorers.
//!
//! Each scorer reads its counters (negatives clamped to zero), emits one
//! [`ScoreItem`] per counted occurrence, and returns a fresh result holding
//! the clamped counters, the undecayed point total, and the items. Scorers
//! never decay their own output.

pub mod interaction;
pub mod penalty;
pub mod pi_dex;
pub mod pi_network;
pub mod staking;
pub mod wallet_age;

pub use interaction::{score_interaction, InteractionResult};
pub use penalty::{
    score_external_penalty, score_suspicious_penalty, ExternalPenaltyResult,
    SuspiciousPenaltyResult,
};
pub use pi_dex::{score_pi_dex, PiDexResult};
pub use pi_network::{score_pi_network, PiNetworkResult};
pub use staking::{score_staking, StakingResult, StakingTier};
pub use wallet_age::{score_wallet_age, WalletAgeResult};

use chrono::{DateTime, Utc};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{ScoreAction, ScoreItem};

/// Push `count` occurrences of `action`, numbered from 1 in the explanation.
pub(crate) fn emit(
    items: &mut Vec<ScoreItem>,
    action: ScoreAction,
    count: u64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) {
    for i in 0..count {
        let timestamp = policy.timestamp(action, i, now);
        items.push(ScoreItem::new(
            action,
            timestamp,
            format!("{} #{}", action.describe(), i + 1),
        ));
    }
}

/// Push a single flat item with a custom explanation.
pub(crate) fn emit_one(
    items: &mut Vec<ScoreItem>,
    action: ScoreAction,
    explanation: String,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) {
    items.push(ScoreItem::new(action, policy.timestamp(action, 0, now), explanation));
}

pub(crate) fn sum_points(items: &[ScoreItem]) -> i64 {
    items.iter().map(|i| i.points).sum()
}
