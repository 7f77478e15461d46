//! Engine configuration.
//!
//! The score cap is the only tunable value; every point weight is a fixed
//! constant in [`rep_core::constants`].

use rep_core::constants::DEFAULT_SCORE_CAP;
use rep_core::error::ConfigError;
use rep_core::tier::TrustThresholds;
use serde::{Deserialize, Serialize};

/// Configuration for a [`ReputationEngine`](crate::ReputationEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Anchors the trust threshold table and caps the backend score.
    pub score_cap: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            score_cap: DEFAULT_SCORE_CAP,
        }
    }
}

impl EngineConfig {
    pub fn with_score_cap(score_cap: i64) -> Self {
        Self { score_cap }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds().map(|_| ())
    }

    /// The threshold table for this cap.
    pub fn thresholds(&self) -> Result<TrustThresholds, ConfigError> {
        TrustThresholds::new(self.score_cap)
    }
}
