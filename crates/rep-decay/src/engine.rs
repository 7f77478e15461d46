//! Step-function decay implementing the [`DecayEvaluator`] trait.

use chrono::{DateTime, Utc};
use rep_core::constants::{
    DECAY_AGING_MAX_DAYS, DECAY_FACTOR_AGING, DECAY_FACTOR_FRESH, DECAY_FACTOR_RECENT,
    DECAY_FACTOR_STALE, DECAY_FRESH_MAX_DAYS, DECAY_RECENT_MAX_DAYS, SECONDS_PER_DAY,
};
use rep_core::traits::DecayEvaluator;
use rep_core::types::ScoreItem;
use tracing::warn;

/// The production decay evaluator.
///
/// | Age (days)   | Multiplier |
/// |--------------|------------|
/// | `≤ 30`       | 1.0        |
/// | `(30, 90]`   | 0.9        |
/// | `(90, 180]`  | 0.7        |
/// | `> 180`      | 0.5        |
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDecay;

impl StepDecay {
    pub fn new() -> Self {
        Self
    }
}

/// Age of `timestamp` at `now` in fractional days.
///
/// Timestamps after `now` or before the Unix epoch are treated as `now`,
/// giving age 0.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use rep_decay::age_days;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
/// assert_eq!(age_days(now - Duration::hours(36), now), 1.5);
/// assert_eq!(age_days(now + Duration::days(3), now), 0.0);
/// ```
pub fn age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    if timestamp > now || timestamp < DateTime::<Utc>::UNIX_EPOCH {
        warn!(%timestamp, %now, "decay: out-of-range timestamp treated as now");
        return 0.0;
    }
    let age = now - timestamp;
    // Milliseconds: nanosecond counts overflow i64 past ~292 years.
    age.num_milliseconds() as f64 / (SECONDS_PER_DAY as f64 * 1_000.0)
}

impl DecayEvaluator for StepDecay {
    fn decay_factor(&self, age_days: f64) -> f64 {
        if !age_days.is_finite() || age_days <= DECAY_FRESH_MAX_DAYS {
            DECAY_FACTOR_FRESH
        } else if age_days <= DECAY_RECENT_MAX_DAYS {
            DECAY_FACTOR_RECENT
        } else if age_days <= DECAY_AGING_MAX_DAYS {
            DECAY_FACTOR_AGING
        } else {
            DECAY_FACTOR_STALE
        }
    }

    fn item_age_days(&self, item: &ScoreItem, now: DateTime<Utc>) -> f64 {
        age_days(item.timestamp, now)
    }
}
