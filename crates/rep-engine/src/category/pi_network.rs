//! Pi-Network on-chain usage: internal transactions, app interactions, SDK
//! payments.
//!
//! Internal transactions take their timestamps from the supplied policy, so
//! a [`TxDateTimeline`](crate::TxDateTimeline) places them at their real
//! dates.

use chrono::{DateTime, Utc};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit, sum_points};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiNetworkResult {
    pub internal_tx_count: u64,
    pub app_interactions: u64,
    pub sdk_payments: u64,
    pub total_points: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_pi_network(
    internal_tx_count: i64,
    app_interactions: i64,
    sdk_payments: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> PiNetworkResult {
    let internal_tx_count = clamp_count(internal_tx_count, "internal_tx_count");
    let app_interactions = clamp_count(app_interactions, "app_interactions");
    let sdk_payments = clamp_count(sdk_payments, "sdk_payments");

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::InternalTx, internal_tx_count, policy, now);
    emit(&mut items, ScoreAction::AppInteraction, app_interactions, policy, now);
    emit(&mut items, ScoreAction::SdkPayment, sdk_payments, policy, now);

    PiNetworkResult {
        internal_tx_count,
        app_interactions,
        sdk_payments,
        total_points: sum_points(&items),
        items,
    }
}
