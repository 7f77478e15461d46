//! Wallet age: rewards longevity, penalizes dormancy.
//!
//! - +2 per elapsed 30-day period (active month)
//! - +1 per elapsed 180-day period (half-year milestone)
//! - −5 once if the wallet has been idle for more than 90 days

use chrono::{DateTime, Duration, Utc};
use rep_core::constants::{ACTIVE_MONTH_DAYS, HALF_YEAR_DAYS, INACTIVITY_THRESHOLD_DAYS};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit, emit_one, sum_points};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAgeResult {
    pub account_age_days: u64,
    pub last_activity_date: DateTime<Utc>,
    pub active_months: u64,
    pub half_years: u64,
    /// Whole days between the last activity and `now` (0 if in the future).
    pub days_since_activity: i64,
    pub inactive: bool,
    pub total_points: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_wallet_age(
    account_age_days: i64,
    last_activity_date: DateTime<Utc>,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> WalletAgeResult {
    let age = clamp_count(account_age_days, "account_age_days");
    let active_months = age / ACTIVE_MONTH_DAYS as u64;
    let half_years = age / HALF_YEAR_DAYS as u64;

    let idle = now.signed_duration_since(last_activity_date);
    let inactive = idle > Duration::days(INACTIVITY_THRESHOLD_DAYS);
    let days_since_activity = idle.num_days().max(0);

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::ActiveMonth, active_months, policy, now);
    emit(&mut items, ScoreAction::HalfYear, half_years, policy, now);
    if inactive {
        emit_one(
            &mut items,
            ScoreAction::Inactivity,
            format!("No activity for {days_since_activity} days"),
            policy,
            now,
        );
    }

    WalletAgeResult {
        account_age_days: age,
        last_activity_date,
        active_months,
        half_years,
        days_since_activity,
        inactive,
        total_points: sum_points(&items),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::SyntheticTimeline;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn new_wallet_scores_nothing() {
        let r = score_wallet_age(0, now(), &SyntheticTimeline, now());
        assert_eq!(r.total_points, 0);
        assert!(r.items.is_empty());
        assert!(!r.inactive);
    }

    #[test]
    fn one_year_old_wallet() {
        // 365 days: 12 active months, 2 half-years.
        let r = score_wallet_age(365, now(), &SyntheticTimeline, now());
        assert_eq!(r.active_months, 12);
        assert_eq!(r.half_years, 2);
        assert_eq!(r.total_points, 12 * 2 + 2);
        assert_eq!(r.items.len(), 14);
        assert_eq!(r.items[11].timestamp, now() - Duration::days(330));
        assert_eq!(r.items[13].timestamp, now() - Duration::days(180));
    }

    #[test]
    fn partial_periods_do_not_count() {
        let r = score_wallet_age(29, now(), &SyntheticTimeline, now());
        assert_eq!(r.active_months, 0);
        assert_eq!(r.total_points, 0);
    }

    #[test]
    fn inactivity_threshold_is_exclusive() {
        let exactly = score_wallet_age(0, now() - Duration::days(90), &SyntheticTimeline, now());
        assert!(!exactly.inactive);

        let past = score_wallet_age(
            0,
            now() - Duration::days(90) - Duration::seconds(1),
            &SyntheticTimeline,
            now(),
        );
        assert!(past.inactive);
        assert_eq!(past.total_points, -5);
        assert_eq!(past.items[0].action, ScoreAction::Inactivity);
    }

    #[test]
    fn future_last_activity_is_not_inactive() {
        let r = score_wallet_age(60, now() + Duration::days(5), &SyntheticTimeline, now());
        assert!(!r.inactive);
        assert_eq!(r.days_since_activity, 0);
        assert_eq!(r.total_points, 4);
    }

    #[test]
    fn negative_age_clamped() {
        let r = score_wallet_age(-400, now(), &SyntheticTimeline, now());
        assert_eq!(r.account_age_days, 0);
        assert!(r.items.is_empty());
    }
}
