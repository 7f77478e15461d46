//! Scoring constants. Point weights are fixed; only the score cap is
//! configurable.

// ---------------------------------------------------------------------------
// Score cap and tier anchors
// ---------------------------------------------------------------------------

/// Default score cap that anchors the trust threshold table.
pub const DEFAULT_SCORE_CAP: i64 = 10_000;

/// Smallest accepted score cap. At 10 every one of the seven bands is
/// non-empty under integer percentage arithmetic.
pub const MIN_SCORE_CAP: i64 = 10;

/// Lower bounds of the six bounded-below tiers, as percentages of the cap.
///
/// | Tier        | Lower bound |
/// |-------------|-------------|
/// | Low Trust   | 0%          |
/// | Medium      | 10%         |
/// | Active      | 25%         |
/// | Trusted     | 45%         |
/// | Pioneer+    | 65%         |
/// | Elite       | 85%         |
pub const TIER_THRESHOLD_PERCENT: [i64; 6] = [0, 10, 25, 45, 65, 85];

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one "active month" wallet-age period.
pub const ACTIVE_MONTH_DAYS: i64 = 30;

/// Days in one half-year wallet-age period.
pub const HALF_YEAR_DAYS: i64 = 180;

/// Inactivity longer than this many days triggers the wallet-age penalty.
pub const INACTIVITY_THRESHOLD_DAYS: i64 = 90;

/// Days between consecutive Pi-Dex regular-activity weeks.
pub const WEEK_DAYS: i64 = 7;

/// Largest counter value scored. Every counted occurrence becomes one item,
/// so larger values are clamped to keep an evaluation's allocation bounded.
pub const MAX_ACTIVITY_COUNT: i64 = 100_000;

// ---------------------------------------------------------------------------
// Decay bands
// ---------------------------------------------------------------------------

/// Items up to this age (inclusive) keep their full value.
pub const DECAY_FRESH_MAX_DAYS: f64 = 30.0;
/// Items up to this age (inclusive) keep 90%.
pub const DECAY_RECENT_MAX_DAYS: f64 = 90.0;
/// Items up to this age (inclusive) keep 70%. Older items keep 50%.
pub const DECAY_AGING_MAX_DAYS: f64 = 180.0;

pub const DECAY_FACTOR_FRESH: f64 = 1.0;
pub const DECAY_FACTOR_RECENT: f64 = 0.9;
pub const DECAY_FACTOR_AGING: f64 = 0.7;
pub const DECAY_FACTOR_STALE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Point weights
// ---------------------------------------------------------------------------

pub const POINTS_ACTIVE_MONTH: i64 = 2;
pub const POINTS_HALF_YEAR: i64 = 1;
pub const PENALTY_INACTIVITY: i64 = -5;

pub const POINTS_DAILY_CHECK_IN: i64 = 3;
pub const POINTS_AD_BONUS: i64 = 5;
pub const POINTS_REPORT_VIEW: i64 = 1;
pub const POINTS_TOOL_USAGE: i64 = 2;

pub const POINTS_INTERNAL_TX: i64 = 2;
pub const POINTS_APP_INTERACTION: i64 = 5;
pub const POINTS_SDK_PAYMENT: i64 = 6;

pub const POINTS_NORMAL_TRADE: i64 = 4;
pub const POINTS_TOKEN_DIVERSITY: i64 = 3;
pub const POINTS_REGULAR_ACTIVITY_WEEK: i64 = 5;
/// Distinct tokens traded before the diversity bonus applies.
pub const TOKEN_DIVERSITY_MIN_TOKENS: i64 = 3;

pub const POINTS_STAKING_LONG: i64 = 10;
pub const POINTS_STAKING_MEDIUM: i64 = 6;
pub const POINTS_STAKING_SHORT: i64 = 3;
/// Staking strictly longer than this many days is "long".
pub const STAKING_LONG_MIN_EXCLUSIVE_DAYS: i64 = 90;
/// Staking of at least this many days (up to the long bound) is "medium".
pub const STAKING_MEDIUM_MIN_DAYS: i64 = 30;

pub const PENALTY_SMALL_TRANSFER: i64 = -2;
pub const PENALTY_FREQUENT_TRANSFER: i64 = -5;
pub const PENALTY_SUDDEN_EXIT: i64 = -10;
pub const PENALTY_CONTINUOUS_DRAIN: i64 = -15;

pub const PENALTY_SPAM: i64 = -3;
pub const PENALTY_FARMING: i64 = -8;
pub const PENALTY_SUSPICIOUS_LINK: i64 = -12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_strictly_increasing() {
        for pair in TIER_THRESHOLD_PERCENT.windows(2) {
            assert!(pair[0] < pair[1], "thresholds not increasing: {pair:?}");
        }
    }

    #[test]
    fn decay_bands_ordered() {
        assert!(DECAY_FRESH_MAX_DAYS < DECAY_RECENT_MAX_DAYS);
        assert!(DECAY_RECENT_MAX_DAYS < DECAY_AGING_MAX_DAYS);
        assert!(DECAY_FACTOR_FRESH > DECAY_FACTOR_RECENT);
        assert!(DECAY_FACTOR_RECENT > DECAY_FACTOR_AGING);
        assert!(DECAY_FACTOR_AGING > DECAY_FACTOR_STALE);
    }

    #[test]
    fn penalties_are_negative() {
        for p in [
            PENALTY_INACTIVITY,
            PENALTY_SMALL_TRANSFER,
            PENALTY_FREQUENT_TRANSFER,
            PENALTY_SUDDEN_EXIT,
            PENALTY_CONTINUOUS_DRAIN,
            PENALTY_SPAM,
            PENALTY_FARMING,
            PENALTY_SUSPICIOUS_LINK,
        ] {
            assert!(p < 0);
        }
    }
}
