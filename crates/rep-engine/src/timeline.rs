//! Timestamp policies for counted actions.
//!
//! Activity counters carry no history, so each occurrence is placed on a
//! synthetic timeline stepping back from `now` by a fixed per-action
//! interval. Occurrence 0 is the most recent:
//!
//! | Action                         | Step    |
//! |--------------------------------|---------|
//! | Active month                   | 30 days |
//! | Half-year milestone            | 180 days|
//! | Regular activity week          | 7 days  |
//! | Flat items (staking, bonus, inactivity) | 0 |
//! | Everything else                | 1 day   |
//!
//! [`TxDateTimeline`] substitutes real internal-transaction dates when the
//! input supplies them.

use chrono::{DateTime, Duration, Utc};
use rep_core::constants::{ACTIVE_MONTH_DAYS, HALF_YEAR_DAYS, WEEK_DAYS};
use rep_core::traits::TimestampPolicy;
use rep_core::types::ScoreAction;

/// Days between consecutive synthetic occurrences of `action`.
pub fn spacing_days(action: ScoreAction) -> i64 {
    use ScoreAction::*;
    match action {
        ActiveMonth => ACTIVE_MONTH_DAYS,
        HalfYear => HALF_YEAR_DAYS,
        RegularActivityWeek => WEEK_DAYS,
        Inactivity | TokenDiversity | StakingLong | StakingMedium | StakingShort => 0,
        DailyCheckIn | AdBonus | ReportView | ToolUsage | InternalTx | AppInteraction
        | SdkPayment | NormalTrade | SmallTransfer | FrequentTransfer | SuddenExit
        | ContinuousDrain | Spam | Farming | SuspiciousLink => 1,
    }
}

/// Synthetic timestamp of occurrence `index` of `action`:
/// `now - index * spacing_days(action)`.
///
/// The timeline never reaches before the Unix epoch; deeper occurrences
/// stack up at the epoch.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use rep_core::ScoreAction;
/// use rep_engine::synthetic_timestamp;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
/// assert_eq!(synthetic_timestamp(ScoreAction::DailyCheckIn, 3, now), now - Duration::days(3));
/// assert_eq!(synthetic_timestamp(ScoreAction::RegularActivityWeek, 2, now), now - Duration::days(14));
/// ```
pub fn synthetic_timestamp(action: ScoreAction, index: u64, now: DateTime<Utc>) -> DateTime<Utc> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    let days = i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(spacing_days(action)));

    days.and_then(Duration::try_days)
        .and_then(|d| now.checked_sub_signed(d))
        .map_or(epoch, |ts| ts.max(epoch))
        .min(now.max(epoch))
}

/// Policy that uses [`synthetic_timestamp`] for every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticTimeline;

impl TimestampPolicy for SyntheticTimeline {
    fn timestamp(&self, action: ScoreAction, index: u64, now: DateTime<Utc>) -> DateTime<Utc> {
        synthetic_timestamp(action, index, now)
    }
}

/// Policy that places internal transaction `i` at `tx_dates[i]`, falling
/// back to synthetic spacing past the end of the list and for every other
/// action.
#[derive(Debug, Clone, Copy)]
pub struct TxDateTimeline<'a> {
    tx_dates: &'a [DateTime<Utc>],
}

impl<'a> TxDateTimeline<'a> {
    pub fn new(tx_dates: &'a [DateTime<Utc>]) -> Self {
        Self { tx_dates }
    }

    /// Number of real dates available.
    pub fn len(&self) -> usize {
        self.tx_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx_dates.is_empty()
    }
}

impl TimestampPolicy for TxDateTimeline<'_> {
    fn timestamp(&self, action: ScoreAction, index: u64, now: DateTime<Utc>) -> DateTime<Utc> {
        if action == ScoreAction::InternalTx {
            let real = usize::try_from(index)
                .ok()
                .and_then(|i| self.tx_dates.get(i));
            if let Some(ts) = real {
                return *ts;
            }
        }
        synthetic_timestamp(action, index, now)
    }
}
