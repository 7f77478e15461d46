//! Error types for reputation scoring.
//!
//! Scoring itself never fails; only configuration and malformed input can be
//! rejected.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("score cap {got} below minimum {min}")] ScoreCapTooSmall { got: i64, min: i64 },
    #[error("trust bands do not match score cap {score_cap}")] InconsistentBands { score_cap: i64 },
}

#[derive(Error, Debug)]
pub enum RepError {
    #[error(transparent)] Config(#[from] ConfigError),
    #[error("invalid wallet data: {0}")] InvalidInput(#[from] serde_json::Error),
}
