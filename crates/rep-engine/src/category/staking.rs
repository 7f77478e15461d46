//! Staking: a single tiered item, never additive.
//!
//! | Staking days | Tier     | Points |
//! |--------------|----------|--------|
//! | `> 90`       | `long`   | +10    |
//! | `30..=90`    | `medium` | +6     |
//! | `1..30`      | `short`  | +3     |
//! | `0`          | `none`   | —      |

use std::fmt;

use chrono::{DateTime, Utc};
use rep_core::constants::{STAKING_LONG_MIN_EXCLUSIVE_DAYS, STAKING_MEDIUM_MIN_DAYS};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit_one, sum_points};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakingTier {
    None,
    Short,
    Medium,
    Long,
}

impl StakingTier {
    pub fn for_days(days: u64) -> Self {
        if days > STAKING_LONG_MIN_EXCLUSIVE_DAYS as u64 {
            Self::Long
        } else if days >= STAKING_MEDIUM_MIN_DAYS as u64 {
            Self::Medium
        } else if days > 0 {
            Self::Short
        } else {
            Self::None
        }
    }

    /// The scored action for this tier, `None` when nothing is staked.
    pub fn action(&self) -> Option<ScoreAction> {
        match self {
            Self::Long => Some(ScoreAction::StakingLong),
            Self::Medium => Some(ScoreAction::StakingMedium),
            Self::Short => Some(ScoreAction::StakingShort),
            Self::None => None,
        }
    }
}

impl fmt::Display for StakingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingResult {
    pub staking_days: u64,
    pub tier: StakingTier,
    pub total_points: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_staking(
    staking_days: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> StakingResult {
    let staking_days = clamp_count(staking_days, "staking_days");
    let tier = StakingTier::for_days(staking_days);

    let mut items = Vec::new();
    if let Some(action) = tier.action() {
        emit_one(
            &mut items,
            action,
            format!("Staked for {staking_days} days ({tier})"),
            policy,
            now,
        );
    }

    StakingResult {
        staking_days,
        tier,
        total_points: sum_points(&items),
        items,
    }
}
