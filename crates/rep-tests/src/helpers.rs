//! Shared test helpers for scenario and property tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{ScoreAction, WalletActivityData};
use rep_engine::synthetic_timestamp;

/// Fixed evaluation instant used across the suite.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// A wallet with no activity, last seen at [`fixed_now`].
pub fn idle_wallet() -> WalletActivityData {
    WalletActivityData::empty(fixed_now())
}

/// A long-lived, well-behaved wallet with activity in every positive
/// category and a couple of minor penalties.
pub fn seasoned_wallet() -> WalletActivityData {
    WalletActivityData {
        account_age_days: 540,
        daily_check_ins: 200,
        ad_bonuses: 30,
        report_views: 45,
        tool_usage: 25,
        internal_tx_count: 60,
        app_interactions: 12,
        sdk_payments: 8,
        normal_trades: 35,
        unique_tokens: 5,
        regular_activity_weeks: 30,
        staking_days: 150,
        small_external_transfers: 2,
        spam_count: 1,
        ..idle_wallet()
    }
}

/// Build a wallet from a flat array of the nineteen counters, in
/// declaration order.
pub fn wallet_from_counters(c: [i64; 19]) -> WalletActivityData {
    WalletActivityData {
        account_age_days: c[0],
        daily_check_ins: c[1],
        ad_bonuses: c[2],
        report_views: c[3],
        tool_usage: c[4],
        internal_tx_count: c[5],
        app_interactions: c[6],
        sdk_payments: c[7],
        normal_trades: c[8],
        unique_tokens: c[9],
        regular_activity_weeks: c[10],
        staking_days: c[11],
        small_external_transfers: c[12],
        frequent_external_transfers: c[13],
        sudden_exits: c[14],
        continuous_drain: c[15],
        spam_count: c[16],
        farming_count: c[17],
        suspicious_links: c[18],
        ..idle_wallet()
    }
}

/// Places every occurrence of one action a fixed number of days back;
/// other actions follow the synthetic timeline.
#[derive(Debug, Clone, Copy)]
pub struct FixedAgePolicy {
    pub action: ScoreAction,
    pub days_ago: i64,
}

impl TimestampPolicy for FixedAgePolicy {
    fn timestamp(&self, action: ScoreAction, index: u64, now: DateTime<Utc>) -> DateTime<Utc> {
        if action == self.action {
            now - Duration::days(self.days_ago)
        } else {
            synthetic_timestamp(action, index, now)
        }
    }
}
