//! Penalty categories. Every item is non-positive and is never decayed.
//!
//! External: −2 small transfer, −5 frequent transfer, −10 sudden exit,
//! −15 continuous drain.
//! Suspicious: −3 spam, −8 farming, −12 suspicious link.

use chrono::{DateTime, Utc};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit, sum_points};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPenaltyResult {
    pub small_transfers: u64,
    pub frequent_transfers: u64,
    pub sudden_exits: u64,
    pub continuous_drain: u64,
    pub total_penalty: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_external_penalty(
    small_transfers: i64,
    frequent_transfers: i64,
    sudden_exits: i64,
    continuous_drain: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> ExternalPenaltyResult {
    let small_transfers = clamp_count(small_transfers, "small_external_transfers");
    let frequent_transfers = clamp_count(frequent_transfers, "frequent_external_transfers");
    let sudden_exits = clamp_count(sudden_exits, "sudden_exits");
    let continuous_drain = clamp_count(continuous_drain, "continuous_drain");

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::SmallTransfer, small_transfers, policy, now);
    emit(&mut items, ScoreAction::FrequentTransfer, frequent_transfers, policy, now);
    emit(&mut items, ScoreAction::SuddenExit, sudden_exits, policy, now);
    emit(&mut items, ScoreAction::ContinuousDrain, continuous_drain, policy, now);

    ExternalPenaltyResult {
        small_transfers,
        frequent_transfers,
        sudden_exits,
        continuous_drain,
        total_penalty: sum_points(&items),
        items,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousPenaltyResult {
    pub spam_count: u64,
    pub farming_count: u64,
    pub suspicious_links: u64,
    pub total_penalty: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_suspicious_penalty(
    spam_count: i64,
    farming_count: i64,
    suspicious_links: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> SuspiciousPenaltyResult {
    let spam_count = clamp_count(spam_count, "spam_count");
    let farming_count = clamp_count(farming_count, "farming_count");
    let suspicious_links = clamp_count(suspicious_links, "suspicious_links");

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::Spam, spam_count, policy, now);
    emit(&mut items, ScoreAction::Farming, farming_count, policy, now);
    emit(&mut items, ScoreAction::SuspiciousLink, suspicious_links, policy, now);

    SuspiciousPenaltyResult {
        spam_count,
        farming_count,
        suspicious_links,
        total_penalty: sum_points(&items),
        items,
    }
}
