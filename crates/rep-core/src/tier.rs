//! Trust tiers and the threshold table.
//!
//! The table is seven contiguous half-open bands `[min, max)` anchored to a
//! configurable score cap:
//!
//! | Tier            | Band                      | Cap = 10 000     |
//! |-----------------|---------------------------|------------------|
//! | Very Low Trust  | `(-∞, 0)`                 | `< 0`            |
//! | Low Trust       | `[0, 10% cap)`            | `0–999`          |
//! | Medium          | `[10% cap, 25% cap)`      | `1000–2499`      |
//! | Active          | `[25% cap, 45% cap)`      | `2500–4499`      |
//! | Trusted         | `[45% cap, 65% cap)`      | `4500–6499`      |
//! | Pioneer+        | `[65% cap, 85% cap)`      | `6500–8499`      |
//! | Elite           | `[85% cap, +∞)`           | `≥ 8500`         |
//!
//! Every integer falls in exactly one band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_SCORE_CAP, MIN_SCORE_CAP, TIER_THRESHOLD_PERCENT};
use crate::error::ConfigError;

/// Ordered trust level, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrustLevel {
    #[serde(rename = "Very Low Trust")]
    VeryLowTrust,
    #[serde(rename = "Low Trust")]
    LowTrust,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Trusted")]
    Trusted,
    #[serde(rename = "Pioneer+")]
    PioneerPlus,
    #[serde(rename = "Elite")]
    Elite,
}

impl TrustLevel {
    /// All levels in ascending order.
    pub const ALL: [TrustLevel; 7] = [
        Self::VeryLowTrust,
        Self::LowTrust,
        Self::Medium,
        Self::Active,
        Self::Trusted,
        Self::PioneerPlus,
        Self::Elite,
    ];

    /// Position in [`TrustLevel::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next level up, or `None` for [`TrustLevel::Elite`].
    pub fn next(&self) -> Option<TrustLevel> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLowTrust => "Very Low Trust",
            Self::LowTrust => "Low Trust",
            Self::Medium => "Medium",
            Self::Active => "Active",
            Self::Trusted => "Trusted",
            Self::PioneerPlus => "Pioneer+",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrustLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown trust level: {s}"))
    }
}

/// One half-open band `[min, max)`. `None` bounds are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustBand {
    pub level: TrustLevel,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl TrustBand {
    pub fn contains(&self, score: i64) -> bool {
        self.min.is_none_or(|min| score >= min) && self.max.is_none_or(|max| score < max)
    }
}

/// The seven-band threshold table for a given score cap.
///
/// Deserialization rebuilds the table from `scoreCap` through
/// [`TrustThresholds::new`]; supplied `bands` must match the rebuilt table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ThresholdsWire")]
pub struct TrustThresholds {
    score_cap: i64,
    bands: [TrustBand; 7],
}

impl TrustThresholds {
    /// Build the table for `score_cap`.
    ///
    /// Returns [`ConfigError::ScoreCapTooSmall`] below [`MIN_SCORE_CAP`],
    /// where integer percentages would collapse bands.
    ///
    /// # Examples
    ///
    /// ```
    /// use rep_core::{TrustLevel, TrustThresholds};
    ///
    /// let t = TrustThresholds::new(10_000).unwrap();
    /// assert_eq!(t.classify(-1), TrustLevel::VeryLowTrust);
    /// assert_eq!(t.classify(999), TrustLevel::LowTrust);
    /// assert_eq!(t.classify(8_500), TrustLevel::Elite);
    /// ```
    pub fn new(score_cap: i64) -> Result<Self, ConfigError> {
        if score_cap < MIN_SCORE_CAP {
            return Err(ConfigError::ScoreCapTooSmall {
                got: score_cap,
                min: MIN_SCORE_CAP,
            });
        }

        Ok(Self::build(score_cap))
    }

    fn build(score_cap: i64) -> Self {
        let cut = |i: usize| score_cap.saturating_mul(TIER_THRESHOLD_PERCENT[i]) / 100;

        let mut bands = [TrustBand {
            level: TrustLevel::VeryLowTrust,
            min: None,
            max: Some(cut(0)),
        }; 7];
        for (i, level) in TrustLevel::ALL.iter().enumerate().skip(1) {
            bands[i] = TrustBand {
                level: *level,
                min: Some(cut(i - 1)),
                max: (i < 6).then(|| cut(i)),
            };
        }

        Self { score_cap, bands }
    }

    pub fn score_cap(&self) -> i64 {
        self.score_cap
    }

    /// The seven bands in ascending order.
    pub fn bands(&self) -> &[TrustBand] {
        &self.bands
    }

    pub fn band(&self, level: TrustLevel) -> &TrustBand {
        &self.bands[level.index()]
    }

    /// The first band containing `score`.
    pub fn band_for(&self, score: i64) -> Option<&TrustBand> {
        self.bands.iter().find(|band| band.contains(score))
    }

    /// Map a score to its trust level.
    ///
    /// Callers pass the uncapped score for direct classification and the
    /// capped backend score for progress display.
    pub fn classify(&self, score: i64) -> TrustLevel {
        match self.band_for(score) {
            Some(band) => band.level,
            None => {
                warn!(score, "no trust band matched; falling back to Medium");
                TrustLevel::Medium
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThresholdsWire {
    score_cap: i64,
    #[serde(default)]
    bands: Option<Vec<TrustBand>>,
}

impl TryFrom<ThresholdsWire> for TrustThresholds {
    type Error = ConfigError;

    fn try_from(wire: ThresholdsWire) -> Result<Self, ConfigError> {
        let table = Self::new(wire.score_cap)?;
        match wire.bands {
            Some(bands) if bands.as_slice() != table.bands() => {
                Err(ConfigError::InconsistentBands { score_cap: wire.score_cap })
            }
            _ => Ok(table),
        }
    }
}

impl Default for TrustThresholds {
    fn default() -> Self {
        Self::build(DEFAULT_SCORE_CAP)
    }
}
