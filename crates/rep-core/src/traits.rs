//! Trait seams of the scoring engine.
//!
//! - [`DecayEvaluator`] — age-based weighting of positive items (rep-decay implements)
//! - [`TimestampPolicy`] — where each counted action sits on the timeline (rep-engine implements)

use chrono::{DateTime, Utc};

use crate::types::{ScoreAction, ScoreItem};

/// Age-based weighting of score items.
///
/// Implementations must be pure: the multiplier depends only on the age.
pub trait DecayEvaluator: Send + Sync {
    /// Multiplier applied to a positive item of the given age in days.
    ///
    /// `age_days` is never negative; timestamps in the future or before the
    /// Unix epoch are normalized to age 0 by [`item_age_days`](Self::item_age_days).
    fn decay_factor(&self, age_days: f64) -> f64;

    /// Age of `item` at `now`, in fractional days.
    fn item_age_days(&self, item: &ScoreItem, now: DateTime<Utc>) -> f64;

    /// Decay every positive item in place and return the decayed total.
    ///
    /// Writes `decay_factor` on each item with `points > 0`. Items with
    /// `points <= 0` are summed at face value and left untouched.
    fn apply(&self, items: &mut [ScoreItem], now: DateTime<Utc>) -> f64 {
        let mut total = 0.0;
        for item in items.iter_mut() {
            if item.is_decayable() {
                let factor = self.decay_factor(self.item_age_days(item, now));
                item.decay_factor = Some(factor);
                total += item.points as f64 * factor;
            } else {
                total += item.points as f64;
            }
        }
        total
    }
}

/// Placement of counted actions on the activity timeline.
///
/// Counters carry no history, so each occurrence `index` (0 = most recent)
/// of an action is given a timestamp relative to `now`. Implementations may
/// substitute real dates where the input has them.
pub trait TimestampPolicy: Send + Sync {
    fn timestamp(&self, action: ScoreAction, index: u64, now: DateTime<Utc>) -> DateTime<Utc>;
}
