//! Core data types: wallet activity input and emitted score items.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;
use crate::error::RepError;

// ---------------------------------------------------------------------------
// WalletActivityData
// ---------------------------------------------------------------------------

/// Lifetime activity snapshot for one wallet.
///
/// Plain counters, no history. Counters are signed on the wire so a faulty
/// producer cannot fail deserialization; scorers read them through
/// [`clamp_count`], which maps negatives to zero and caps values at
/// [`MAX_ACTIVITY_COUNT`]. Fractional counters are rejected by
/// [`from_json`](Self::from_json).
///
/// `tx_dates`, when present, holds real internal-transaction timestamps
/// (most recent first). It may be shorter than `internal_tx_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletActivityData {
    pub account_age_days: i64,
    pub last_activity_date: DateTime<Utc>,

    pub daily_check_ins: i64,
    pub ad_bonuses: i64,
    pub report_views: i64,
    pub tool_usage: i64,

    pub internal_tx_count: i64,
    pub app_interactions: i64,
    pub sdk_payments: i64,

    pub normal_trades: i64,
    pub unique_tokens: i64,
    pub regular_activity_weeks: i64,

    pub staking_days: i64,

    pub small_external_transfers: i64,
    pub frequent_external_transfers: i64,
    pub sudden_exits: i64,
    pub continuous_drain: i64,

    pub spam_count: i64,
    pub farming_count: i64,
    pub suspicious_links: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_dates: Option<Vec<DateTime<Utc>>>,
}

impl WalletActivityData {
    /// A wallet with every counter at zero, last seen at `last_activity_date`.
    pub fn empty(last_activity_date: DateTime<Utc>) -> Self {
        Self {
            account_age_days: 0,
            last_activity_date,
            daily_check_ins: 0,
            ad_bonuses: 0,
            report_views: 0,
            tool_usage: 0,
            internal_tx_count: 0,
            app_interactions: 0,
            sdk_payments: 0,
            normal_trades: 0,
            unique_tokens: 0,
            regular_activity_weeks: 0,
            staking_days: 0,
            small_external_transfers: 0,
            frequent_external_transfers: 0,
            sudden_exits: 0,
            continuous_drain: 0,
            spam_count: 0,
            farming_count: 0,
            suspicious_links: 0,
            tx_dates: None,
        }
    }

    /// Parse a camelCase JSON snapshot. Every counter and
    /// `lastActivityDate` must be present; `txDates` is optional.
    pub fn from_json(input: &str) -> Result<Self, RepError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Read a counter, clamped to `0..=MAX_ACTIVITY_COUNT`.
///
/// A negative counter is a producer bug; it is logged and treated as no
/// activity. Counters above the cap are logged and scored at the cap.
pub fn clamp_count(value: i64, field: &'static str) -> u64 {
    if value < 0 {
        warn!(field, value, "clamping negative activity counter to zero");
        return 0;
    }
    if value > MAX_ACTIVITY_COUNT {
        warn!(field, value, max = MAX_ACTIVITY_COUNT, "clamping oversized activity counter");
        return MAX_ACTIVITY_COUNT as u64;
    }
    value as u64
}

// ---------------------------------------------------------------------------
// Categories and actions
// ---------------------------------------------------------------------------

/// The seven independently scored activity groupings.
///
/// Declaration order is the aggregation order consumed by breakdown
/// displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    WalletAge,
    Interaction,
    PiNetwork,
    PiDex,
    Staking,
    ExternalPenalty,
    SuspiciousPenalty,
}

impl ScoreCategory {
    /// All categories in aggregation order.
    pub const ALL: [ScoreCategory; 7] = [
        Self::WalletAge,
        Self::Interaction,
        Self::PiNetwork,
        Self::PiDex,
        Self::Staking,
        Self::ExternalPenalty,
        Self::SuspiciousPenalty,
    ];

    /// Whether every item in this category carries non-positive points.
    pub fn is_penalty(&self) -> bool {
        matches!(self, Self::ExternalPenalty | Self::SuspiciousPenalty)
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WalletAge => "wallet_age",
            Self::Interaction => "interaction",
            Self::PiNetwork => "pi_network",
            Self::PiDex => "pi_dex",
            Self::Staking => "staking",
            Self::ExternalPenalty => "external_penalty",
            Self::SuspiciousPenalty => "suspicious_penalty",
        };
        write!(f, "{s}")
    }
}

/// A single scored action type. Each action has a fixed point value and
/// belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAction {
    ActiveMonth,
    HalfYear,
    Inactivity,

    DailyCheckIn,
    AdBonus,
    ReportView,
    ToolUsage,

    InternalTx,
    AppInteraction,
    SdkPayment,

    NormalTrade,
    TokenDiversity,
    RegularActivityWeek,

    StakingLong,
    StakingMedium,
    StakingShort,

    SmallTransfer,
    FrequentTransfer,
    SuddenExit,
    ContinuousDrain,

    Spam,
    Farming,
    SuspiciousLink,
}

impl ScoreAction {
    /// Fixed point value of one occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use rep_core::ScoreAction;
    ///
    /// assert_eq!(ScoreAction::DailyCheckIn.points(), 3);
    /// assert_eq!(ScoreAction::SuspiciousLink.points(), -12);
    /// ```
    pub fn points(&self) -> i64 {
        match self {
            Self::ActiveMonth => POINTS_ACTIVE_MONTH,
            Self::HalfYear => POINTS_HALF_YEAR,
            Self::Inactivity => PENALTY_INACTIVITY,
            Self::DailyCheckIn => POINTS_DAILY_CHECK_IN,
            Self::AdBonus => POINTS_AD_BONUS,
            Self::ReportView => POINTS_REPORT_VIEW,
            Self::ToolUsage => POINTS_TOOL_USAGE,
            Self::InternalTx => POINTS_INTERNAL_TX,
            Self::AppInteraction => POINTS_APP_INTERACTION,
            Self::SdkPayment => POINTS_SDK_PAYMENT,
            Self::NormalTrade => POINTS_NORMAL_TRADE,
            Self::TokenDiversity => POINTS_TOKEN_DIVERSITY,
            Self::RegularActivityWeek => POINTS_REGULAR_ACTIVITY_WEEK,
            Self::StakingLong => POINTS_STAKING_LONG,
            Self::StakingMedium => POINTS_STAKING_MEDIUM,
            Self::StakingShort => POINTS_STAKING_SHORT,
            Self::SmallTransfer => PENALTY_SMALL_TRANSFER,
            Self::FrequentTransfer => PENALTY_FREQUENT_TRANSFER,
            Self::SuddenExit => PENALTY_SUDDEN_EXIT,
            Self::ContinuousDrain => PENALTY_CONTINUOUS_DRAIN,
            Self::Spam => PENALTY_SPAM,
            Self::Farming => PENALTY_FARMING,
            Self::SuspiciousLink => PENALTY_SUSPICIOUS_LINK,
        }
    }

    pub fn category(&self) -> ScoreCategory {
        match self {
            Self::ActiveMonth | Self::HalfYear | Self::Inactivity => ScoreCategory::WalletAge,
            Self::DailyCheckIn | Self::AdBonus | Self::ReportView | Self::ToolUsage => {
                ScoreCategory::Interaction
            }
            Self::InternalTx | Self::AppInteraction | Self::SdkPayment => ScoreCategory::PiNetwork,
            Self::NormalTrade | Self::TokenDiversity | Self::RegularActivityWeek => {
                ScoreCategory::PiDex
            }
            Self::StakingLong | Self::StakingMedium | Self::StakingShort => ScoreCategory::Staking,
            Self::SmallTransfer
            | Self::FrequentTransfer
            | Self::SuddenExit
            | Self::ContinuousDrain => ScoreCategory::ExternalPenalty,
            Self::Spam | Self::Farming | Self::SuspiciousLink => ScoreCategory::SuspiciousPenalty,
        }
    }

    /// Human-readable action name used in item explanations.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ActiveMonth => "Active month",
            Self::HalfYear => "Half-year milestone",
            Self::Inactivity => "Inactivity penalty",
            Self::DailyCheckIn => "Daily check-in",
            Self::AdBonus => "Ad bonus",
            Self::ReportView => "Report view",
            Self::ToolUsage => "Tool usage",
            Self::InternalTx => "Internal transaction",
            Self::AppInteraction => "App interaction",
            Self::SdkPayment => "SDK payment",
            Self::NormalTrade => "Normal trade",
            Self::TokenDiversity => "Token diversity bonus",
            Self::RegularActivityWeek => "Regular activity week",
            Self::StakingLong => "Long-term staking",
            Self::StakingMedium => "Medium-term staking",
            Self::StakingShort => "Short-term staking",
            Self::SmallTransfer => "Small external transfer",
            Self::FrequentTransfer => "Frequent external transfer",
            Self::SuddenExit => "Sudden exit",
            Self::ContinuousDrain => "Continuous drain",
            Self::Spam => "Spam activity",
            Self::Farming => "Farming activity",
            Self::SuspiciousLink => "Suspicious link",
        }
    }
}

impl fmt::Display for ScoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

// ---------------------------------------------------------------------------
// ScoreItem
// ---------------------------------------------------------------------------

/// One discrete, timestamped unit of evidence contributing to a score.
///
/// `decay_factor` is `None` until the decay evaluator visits the item, and
/// stays `None` for items with `points <= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreItem {
    pub category: ScoreCategory,
    pub action: ScoreAction,
    pub points: i64,
    pub timestamp: DateTime<Utc>,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_factor: Option<f64>,
}

impl ScoreItem {
    /// Create an undecayed item whose points and category come from `action`.
    pub fn new(action: ScoreAction, timestamp: DateTime<Utc>, explanation: impl Into<String>) -> Self {
        Self {
            category: action.category(),
            action,
            points: action.points(),
            timestamp,
            explanation: explanation.into(),
            decay_factor: None,
        }
    }

    pub fn is_decayable(&self) -> bool {
        self.points > 0
    }

    /// Points after decay. Non-decayable or unvisited items count in full.
    pub fn decayed_points(&self) -> f64 {
        self.points as f64 * self.decay_factor.unwrap_or(1.0)
    }
}
