//! End-to-end scenarios for the reputation engine.

use chrono::{Duration, TimeZone, Utc};
use rep_core::constants::{DEFAULT_SCORE_CAP, MAX_ACTIVITY_COUNT};
use rep_core::traits::DecayEvaluator;
use rep_core::types::{ScoreAction, ScoreCategory, WalletActivityData};
use rep_core::TrustLevel;
use rep_decay::{age_days, StepDecay};
use rep_engine::category::StakingTier;
use rep_engine::{EngineConfig, ReputationEngine};
use rep_tests::helpers::*;

fn engine() -> ReputationEngine {
    ReputationEngine::default()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn zero_activity_is_low_trust() {
    let r = engine().calculate_atomic_reputation(&idle_wallet(), fixed_now());
    assert_eq!(r.raw_score, 0);
    assert_eq!(r.adjusted_score, 0);
    assert_eq!(r.trust_level, TrustLevel::LowTrust);
}

#[test]
fn check_in_past_ninety_days_decays_to_seventy_percent() {
    let data = WalletActivityData {
        daily_check_ins: 1,
        ..idle_wallet()
    };
    let policy = FixedAgePolicy {
        action: ScoreAction::DailyCheckIn,
        days_ago: 91,
    };
    let r = engine().calculate_with_policy(&data, &policy, fixed_now());
    assert_eq!(r.raw_score, 3);
    assert_eq!(r.adjusted_score, 2);
    assert_eq!(r.all_items[0].decay_factor, Some(0.7));
}

#[test]
fn medium_staking_emits_single_item() {
    let data = WalletActivityData {
        staking_days: 45,
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert_eq!(r.staking.tier, StakingTier::Medium);
    assert_eq!(r.staking.items.len(), 1);
    assert_eq!(r.staking.items[0].points, 6);
    assert_eq!(r.raw_score, 6);
}

#[test]
fn no_staking_emits_nothing() {
    let r = engine().calculate_atomic_reputation(&idle_wallet(), fixed_now());
    assert_eq!(r.staking.tier, StakingTier::None);
    assert!(r.staking.items.is_empty());
}

#[test]
fn display_score_overflows_cap() {
    let p = engine().level_progress(15_000);
    assert_eq!(p.display_score, 15_000);
    assert_eq!(p.backend_score, DEFAULT_SCORE_CAP);
    assert_eq!(p.current_level, TrustLevel::Elite);
    assert_eq!(p.progress_in_level, 100.0);
    assert_eq!(p.points_to_next_level, 0);
    assert_eq!(p.next_level, None);
}

#[test]
fn tier_boundaries() {
    let e = engine();
    let cases = [
        (-1, TrustLevel::VeryLowTrust),
        (0, TrustLevel::LowTrust),
        (999, TrustLevel::LowTrust),
        (1_000, TrustLevel::Medium),
        (2_500, TrustLevel::Active),
        (4_500, TrustLevel::Trusted),
        (6_500, TrustLevel::PioneerPlus),
        (8_499, TrustLevel::PioneerPlus),
        (8_500, TrustLevel::Elite),
        (25_000, TrustLevel::Elite),
    ];
    for (score, level) in cases {
        assert_eq!(e.classify(score), level, "score {score}");
    }
}

// ---------------------------------------------------------------------------
// Whole-wallet behaviour
// ---------------------------------------------------------------------------

#[test]
fn seasoned_wallet_totals() {
    let r = engine().calculate_atomic_reputation(&seasoned_wallet(), fixed_now());

    assert_eq!(r.wallet_age.total_points, 18 * 2 + 3);
    assert_eq!(r.interaction.total_points, 200 * 3 + 30 * 5 + 45 + 25 * 2);
    assert_eq!(r.pi_network.total_points, 60 * 2 + 12 * 5 + 8 * 6);
    assert_eq!(r.pi_dex.total_points, 35 * 4 + 3 + 30 * 5);
    assert_eq!(r.staking.total_points, 10);
    assert_eq!(r.external_penalty.total_penalty, -4);
    assert_eq!(r.suspicious_penalty.total_penalty, -3);
    assert_eq!(r.raw_score, 39 + 845 + 228 + 293 + 10 - 7);

    // Older check-ins, trades and weeks decay.
    assert!(r.adjusted_score < r.raw_score);
    assert!(r.adjusted_score >= 1_000);
    assert_eq!(r.trust_level, TrustLevel::Medium);
}

#[test]
fn dormant_wallet_takes_inactivity_penalty() {
    let data = WalletActivityData {
        account_age_days: 60,
        last_activity_date: fixed_now() - Duration::days(120),
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert!(r.wallet_age.inactive);
    assert_eq!(r.wallet_age.days_since_activity, 120);
    assert_eq!(r.raw_score, 2 * 2 - 5);
    assert_eq!(r.adjusted_score, -1);
    assert_eq!(r.trust_level, TrustLevel::VeryLowTrust);
}

#[test]
fn tx_dates_shorter_than_count_fall_back() {
    let data = WalletActivityData {
        internal_tx_count: 3,
        tx_dates: Some(vec![fixed_now() - Duration::days(365)]),
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    let stamps: Vec<_> = r.pi_network.items.iter().map(|i| i.timestamp).collect();
    assert_eq!(stamps[0], fixed_now() - Duration::days(365));
    assert_eq!(stamps[1], fixed_now() - Duration::days(1));
    assert_eq!(stamps[2], fixed_now() - Duration::days(2));
    // 2 * 0.5 + 2 + 2
    assert_eq!(r.adjusted_score, 5);
}

#[test]
fn out_of_range_tx_dates_count_as_fresh() {
    let data = WalletActivityData {
        internal_tx_count: 2,
        tx_dates: Some(vec![
            fixed_now() + Duration::days(30),
            Utc.with_ymd_and_hms(1965, 3, 1, 0, 0, 0).unwrap(),
        ]),
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert!(r.all_items.iter().all(|i| i.decay_factor == Some(1.0)));
    assert_eq!(r.adjusted_score, 4);
}

#[test]
fn negative_counters_are_clamped() {
    let data = WalletActivityData {
        account_age_days: -90,
        daily_check_ins: -10,
        staking_days: -5,
        spam_count: -3,
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert_eq!(r.raw_score, 0);
    assert_eq!(r.adjusted_score, 0);
    assert!(r.all_items.is_empty());
    assert_eq!(r.interaction.daily_check_ins, 0);
}

#[test]
fn oversized_counter_is_capped() {
    let data = WalletActivityData {
        daily_check_ins: 9_000_000_000_000_000_000,
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert_eq!(r.interaction.daily_check_ins, MAX_ACTIVITY_COUNT as u64);
    assert_eq!(r.all_items.len(), MAX_ACTIVITY_COUNT as usize);
    assert_eq!(r.raw_score, MAX_ACTIVITY_COUNT * 3);
}

#[test]
fn item_factors_follow_step_decay() {
    let r = engine().calculate_atomic_reputation(&seasoned_wallet(), fixed_now());
    let decay = StepDecay::new();
    for item in &r.all_items {
        let expected = (item.points > 0)
            .then(|| decay.decay_factor(age_days(item.timestamp, fixed_now())));
        assert_eq!(item.decay_factor, expected, "{}", item.explanation);
    }
}

#[test]
fn penalties_bypass_decay() {
    let data = WalletActivityData {
        small_external_transfers: 4,
        frequent_external_transfers: 1,
        continuous_drain: 2,
        farming_count: 1,
        suspicious_links: 1,
        ..idle_wallet()
    };
    let r = engine().calculate_atomic_reputation(&data, fixed_now());
    assert_eq!(r.raw_score, -8 - 5 - 30 - 8 - 12);
    assert_eq!(r.adjusted_score, r.raw_score);
    assert!(r.all_items.iter().all(|i| i.decay_factor.is_none()));
}

#[test]
fn breakdown_follows_category_order() {
    let r = engine().calculate_atomic_reputation(&seasoned_wallet(), fixed_now());
    let cats: Vec<_> = r.breakdown().iter().map(|b| b.category).collect();
    assert_eq!(cats, ScoreCategory::ALL.to_vec());
}

#[test]
fn small_cap_changes_tier_not_score() {
    let small = ReputationEngine::new(EngineConfig::with_score_cap(1_000)).unwrap();
    let r_small = small.calculate_atomic_reputation(&seasoned_wallet(), fixed_now());
    let r_default = engine().calculate_atomic_reputation(&seasoned_wallet(), fixed_now());
    assert_eq!(r_small.adjusted_score, r_default.adjusted_score);
    assert_eq!(r_small.trust_level, TrustLevel::Elite);

    let p = small.level_progress(r_small.adjusted_score);
    assert_eq!(p.backend_score, 1_000);
    assert_eq!(p.display_score, r_small.adjusted_score);
}

#[test]
fn result_round_trips_through_json() {
    let r = engine().calculate_atomic_reputation(&seasoned_wallet(), fixed_now());
    let json = serde_json::to_string(&r).unwrap();
    let back: rep_engine::AtomicReputationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.raw_score, r.raw_score);
    assert_eq!(back.trust_level, r.trust_level);
    assert_eq!(back.all_items.len(), r.all_items.len());
}
