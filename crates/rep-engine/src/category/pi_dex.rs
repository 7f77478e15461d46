//! Pi-Dex trading: trades, token diversity, weekly regularity.

use chrono::{DateTime, Utc};
use rep_core::constants::TOKEN_DIVERSITY_MIN_TOKENS;
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit, emit_one, sum_points};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiDexResult {
    pub normal_trades: u64,
    pub unique_tokens: u64,
    pub regular_activity_weeks: u64,
    pub diversity_bonus: bool,
    pub total_points: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_pi_dex(
    normal_trades: i64,
    unique_tokens: i64,
    regular_activity_weeks: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> PiDexResult {
    let normal_trades = clamp_count(normal_trades, "normal_trades");
    let unique_tokens = clamp_count(unique_tokens, "unique_tokens");
    let regular_activity_weeks = clamp_count(regular_activity_weeks, "regular_activity_weeks");
    let diversity_bonus = unique_tokens >= TOKEN_DIVERSITY_MIN_TOKENS as u64;

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::NormalTrade, normal_trades, policy, now);
    if diversity_bonus {
        emit_one(
            &mut items,
            ScoreAction::TokenDiversity,
            format!("Traded {unique_tokens} distinct tokens"),
            policy,
            now,
        );
    }
    emit(
        &mut items,
        ScoreAction::RegularActivityWeek,
        regular_activity_weeks,
        policy,
        now,
    );

    PiDexResult {
        normal_trades,
        unique_tokens,
        regular_activity_weeks,
        diversity_bonus,
        total_points: sum_points(&items),
        items,
    }
}
