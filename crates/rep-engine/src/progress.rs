//! Level progress: where a score sits within its tier.
//!
//! Two numbers come out of one score:
//! - the **display score** is the score as given, possibly above the cap, for
//!   the large numeric readout;
//! - the **backend score** is `min(score, cap)` and drives the tier lookup and
//!   the progress bar, so the top tier saturates at 100%.

use rep_core::tier::{TrustLevel, TrustThresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub current_level: TrustLevel,
    /// Position of `current_level` in [`TrustLevel::ALL`] (0–6).
    pub level_index: usize,
    /// Percentage of the current band covered, in `[0, 100]`.
    pub progress_in_level: f64,
    /// Points from the backend score to the next band, 0 in the top band.
    pub points_to_next_level: i64,
    pub next_level: Option<TrustLevel>,
    pub display_score: i64,
    pub backend_score: i64,
}

/// Compute tier progress for `score` against `thresholds`.
///
/// The bottom band is unbounded below and always reports 0% progress. The
/// top band's span runs from its lower bound to the score cap.
///
/// # Examples
///
/// ```
/// use rep_core::{TrustLevel, TrustThresholds};
/// use rep_engine::level_progress;
///
/// let p = level_progress(15_000, &TrustThresholds::default());
/// assert_eq!(p.display_score, 15_000);
/// assert_eq!(p.backend_score, 10_000);
/// assert_eq!(p.current_level, TrustLevel::Elite);
/// assert_eq!(p.progress_in_level, 100.0);
/// assert_eq!(p.next_level, None);
/// ```
pub fn level_progress(score: i64, thresholds: &TrustThresholds) -> LevelProgress {
    let cap = thresholds.score_cap();
    let backend_score = score.min(cap);
    let current_level = thresholds.classify(backend_score);
    let band = thresholds.band(current_level);
    let next_level = current_level.next();

    let progress_in_level = match band.min {
        None => 0.0,
        Some(min) => {
            let span = band.max.unwrap_or(cap).saturating_sub(min);
            if span <= 0 {
                100.0
            } else {
                let covered = backend_score.saturating_sub(min) as f64;
                (covered / span as f64 * 100.0).clamp(0.0, 100.0)
            }
        }
    };

    let points_to_next_level = next_level
        .and_then(|next| thresholds.band(next).min)
        .map_or(0, |next_min| next_min.saturating_sub(backend_score).max(0));

    LevelProgress {
        current_level,
        level_index: current_level.index(),
        progress_in_level,
        points_to_next_level,
        next_level,
        display_score: score,
        backend_score,
    }
}
