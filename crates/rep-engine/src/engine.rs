//! Aggregation: runs the category scorers, decays, and classifies.

use chrono::{DateTime, Utc};
use rep_core::error::ConfigError;
use rep_core::tier::{TrustLevel, TrustThresholds};
use rep_core::traits::{DecayEvaluator, TimestampPolicy};
use rep_core::types::{ScoreCategory, ScoreItem, WalletActivityData};
use rep_decay::StepDecay;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{
    score_external_penalty, score_interaction, score_pi_dex, score_pi_network, score_staking,
    score_suspicious_penalty, score_wallet_age, ExternalPenaltyResult, InteractionResult,
    PiDexResult, PiNetworkResult, StakingResult, SuspiciousPenaltyResult, WalletAgeResult,
};
use crate::config::EngineConfig;
use crate::progress::{level_progress, LevelProgress};
use crate::timeline::TxDateTimeline;

/// Round to the nearest integer, ties toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
///
/// # Examples
///
/// ```
/// use rep_engine::round_score;
///
/// assert_eq!(round_score(2.1), 2);
/// assert_eq!(round_score(2.5), 3);
/// assert_eq!(round_score(-2.5), -2);
/// assert_eq!(round_score(-2.6), -3);
/// ```
pub fn round_score(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Outcome of one evaluation.
///
/// Invariants:
/// * `raw_score` is the sum of every item's undecayed points.
/// * `adjusted_score = round_score(Σ decayed positive + Σ non-positive)`.
/// * `adjusted_score <= raw_score`.
/// * `trust_level` classifies the uncapped `adjusted_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicReputationResult {
    pub raw_score: i64,
    pub adjusted_score: i64,
    pub trust_level: TrustLevel,
    pub wallet_age: WalletAgeResult,
    pub interaction: InteractionResult,
    pub pi_network: PiNetworkResult,
    pub pi_dex: PiDexResult,
    pub staking: StakingResult,
    pub external_penalty: ExternalPenaltyResult,
    pub suspicious_penalty: SuspiciousPenaltyResult,
    /// Every item in category order: wallet age, interaction, pi-network,
    /// pi-dex, staking, external penalty, suspicious penalty.
    pub all_items: Vec<ScoreItem>,
    pub last_updated: DateTime<Utc>,
}

/// Per-category totals for breakdown displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: ScoreCategory,
    pub item_count: usize,
    pub raw_points: i64,
    pub decayed_points: f64,
}

impl AtomicReputationResult {
    /// Totals for each of the seven categories, in aggregation order.
    pub fn breakdown(&self) -> Vec<CategoryBreakdown> {
        ScoreCategory::ALL
            .iter()
            .map(|&category| {
                let items = self.all_items.iter().filter(|i| i.category == category);
                let (item_count, raw_points, decayed_points) =
                    items.fold((0, 0i64, 0.0f64), |(n, raw, dec), i| {
                        (n + 1, raw + i.points, dec + i.decayed_points())
                    });
                CategoryBreakdown {
                    category,
                    item_count,
                    raw_points,
                    decayed_points,
                }
            })
            .collect()
    }

    /// Category item lists, mutably, in aggregation order.
    fn category_items_mut(&mut self) -> [&mut Vec<ScoreItem>; 7] {
        [
            &mut self.wallet_age.items,
            &mut self.interaction.items,
            &mut self.pi_network.items,
            &mut self.pi_dex.items,
            &mut self.staking.items,
            &mut self.external_penalty.items,
            &mut self.suspicious_penalty.items,
        ]
    }
}

/// The scoring engine.
///
/// Holds only immutable configuration and the injected decay evaluator, so
/// one engine can be shared across threads and reused for any number of
/// wallets.
#[derive(Debug, Clone)]
pub struct ReputationEngine<D = StepDecay> {
    config: EngineConfig,
    thresholds: TrustThresholds,
    decay: D,
}

impl ReputationEngine<StepDecay> {
    /// Engine with the production step decay.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_decay(config, StepDecay::new())
    }
}

impl Default for ReputationEngine<StepDecay> {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            thresholds: TrustThresholds::default(),
            decay: StepDecay::new(),
        }
    }
}

impl<D: DecayEvaluator> ReputationEngine<D> {
    pub fn with_decay(config: EngineConfig, decay: D) -> Result<Self, ConfigError> {
        let thresholds = config.thresholds()?;
        Ok(Self {
            config,
            thresholds,
            decay,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn thresholds(&self) -> &TrustThresholds {
        &self.thresholds
    }

    /// Classify an uncapped score.
    pub fn classify(&self, score: i64) -> TrustLevel {
        self.thresholds.classify(score)
    }

    /// Tier progress for a score, capped at the configured score cap.
    pub fn level_progress(&self, score: i64) -> LevelProgress {
        level_progress(score, &self.thresholds)
    }

    /// Score one wallet snapshot at `now`.
    ///
    /// Internal transactions are placed at `data.tx_dates` where available;
    /// everything else follows the synthetic timeline. Never fails: negative
    /// counters are clamped and out-of-range timestamps count as fresh.
    pub fn calculate_atomic_reputation(
        &self,
        data: &WalletActivityData,
        now: DateTime<Utc>,
    ) -> AtomicReputationResult {
        let timeline = TxDateTimeline::new(data.tx_dates.as_deref().unwrap_or(&[]));
        self.calculate_with_policy(data, &timeline, now)
    }

    /// Score one wallet snapshot with an explicit timestamp policy.
    pub fn calculate_with_policy(
        &self,
        data: &WalletActivityData,
        policy: &dyn TimestampPolicy,
        now: DateTime<Utc>,
    ) -> AtomicReputationResult {
        let wallet_age =
            score_wallet_age(data.account_age_days, data.last_activity_date, policy, now);
        let interaction = score_interaction(
            data.daily_check_ins,
            data.ad_bonuses,
            data.report_views,
            data.tool_usage,
            policy,
            now,
        );
        let pi_network = score_pi_network(
            data.internal_tx_count,
            data.app_interactions,
            data.sdk_payments,
            policy,
            now,
        );
        let pi_dex = score_pi_dex(
            data.normal_trades,
            data.unique_tokens,
            data.regular_activity_weeks,
            policy,
            now,
        );
        let staking = score_staking(data.staking_days, policy, now);
        let external_penalty = score_external_penalty(
            data.small_external_transfers,
            data.frequent_external_transfers,
            data.sudden_exits,
            data.continuous_drain,
            policy,
            now,
        );
        let suspicious_penalty = score_suspicious_penalty(
            data.spam_count,
            data.farming_count,
            data.suspicious_links,
            policy,
            now,
        );

        let mut all_items: Vec<ScoreItem> = [
            &wallet_age.items,
            &interaction.items,
            &pi_network.items,
            &pi_dex.items,
            &staking.items,
            &external_penalty.items,
            &suspicious_penalty.items,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

        let raw_score: i64 = all_items.iter().map(|i| i.points).sum();
        let decayed = self.decay.apply(&mut all_items, now);
        let adjusted_score = round_score(decayed);
        let trust_level = self.thresholds.classify(adjusted_score);

        let mut result = AtomicReputationResult {
            raw_score,
            adjusted_score,
            trust_level,
            wallet_age,
            interaction,
            pi_network,
            pi_dex,
            staking,
            external_penalty,
            suspicious_penalty,
            all_items: Vec::new(),
            last_updated: now,
        };

        // Mirror decay factors onto the per-category copies.
        let mut decayed_iter = all_items.iter();
        for items in result.category_items_mut() {
            for (item, decayed) in items.iter_mut().zip(decayed_iter.by_ref()) {
                item.decay_factor = decayed.decay_factor;
            }
        }

        result.all_items = all_items;

        debug!(
            raw_score,
            adjusted_score,
            trust_level = %trust_level,
            items = result.all_items.len(),
            "reputation: evaluation complete"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn engine() -> ReputationEngine {
        ReputationEngine::default()
    }

    fn active_wallet() -> WalletActivityData {
        WalletActivityData {
            account_age_days: 400,
            daily_check_ins: 120,
            ad_bonuses: 10,
            report_views: 30,
            tool_usage: 15,
            internal_tx_count: 40,
            app_interactions: 6,
            sdk_payments: 3,
            normal_trades: 25,
            unique_tokens: 4,
            regular_activity_weeks: 20,
            staking_days: 120,
            small_external_transfers: 2,
            sudden_exits: 1,
            spam_count: 1,
            ..WalletActivityData::empty(now())
        }
    }

    // --- round_score ---

    #[test]
    fn rounding_ties_up() {
        assert_eq!(round_score(0.5), 1);
        assert_eq!(round_score(-0.5), 0);
        assert_eq!(round_score(-1.5), -1);
        assert_eq!(round_score(f64::NAN), 0);
    }

    // --- calculate_atomic_reputation ---

    #[test]
    fn zero_activity() {
        let r = engine().calculate_atomic_reputation(&WalletActivityData::empty(now()), now());
        assert_eq!(r.raw_score, 0);
        assert_eq!(r.adjusted_score, 0);
        assert_eq!(r.trust_level, TrustLevel::LowTrust);
        assert!(r.all_items.is_empty());
        assert_eq!(r.last_updated, now());
    }

    #[test]
    fn raw_score_is_sum_of_category_totals() {
        let r = engine().calculate_atomic_reputation(&active_wallet(), now());
        let sum = r.wallet_age.total_points
            + r.interaction.total_points
            + r.pi_network.total_points
            + r.pi_dex.total_points
            + r.staking.total_points
            + r.external_penalty.total_penalty
            + r.suspicious_penalty.total_penalty;
        assert_eq!(r.raw_score, sum);
        assert!(r.adjusted_score <= r.raw_score);
    }

    #[test]
    fn all_items_in_category_order() {
        let r = engine().calculate_atomic_reputation(&active_wallet(), now());
        let cats: Vec<ScoreCategory> = r.all_items.iter().map(|i| i.category).collect();
        let mut sorted = cats.clone();
        sorted.sort();
        assert_eq!(cats, sorted);
        assert_eq!(cats.first(), Some(&ScoreCategory::WalletAge));
        assert_eq!(cats.last(), Some(&ScoreCategory::SuspiciousPenalty));
    }

    #[test]
    fn decay_factors_visible_on_category_items() {
        let r = engine().calculate_atomic_reputation(&active_wallet(), now());
        // Check-in #100 is 99 days old.
        assert_eq!(r.interaction.items[99].decay_factor, Some(0.7));
        assert_eq!(r.interaction.items[0].decay_factor, Some(1.0));
        assert!(r.external_penalty.items.iter().all(|i| i.decay_factor.is_none()));
    }

    #[test]
    fn decay_boundary_single_check_in() {
        // One check-in placed 91 days back via a synthetic index of 91.
        let data = WalletActivityData {
            daily_check_ins: 92,
            ..WalletActivityData::empty(now())
        };
        let r = engine().calculate_atomic_reputation(&data, now());
        let oldest = r.all_items.last().unwrap();
        assert_eq!(oldest.timestamp, now() - Duration::days(91));
        assert_eq!(oldest.decay_factor, Some(0.7));
    }

    #[test]
    fn tx_dates_drive_internal_tx_decay() {
        let data = WalletActivityData {
            internal_tx_count: 2,
            tx_dates: Some(vec![now() - Duration::days(200), now() - Duration::days(200)]),
            ..WalletActivityData::empty(now())
        };
        let r = engine().calculate_atomic_reputation(&data, now());
        assert_eq!(r.raw_score, 4);
        assert_eq!(r.adjusted_score, 2);
    }

    #[test]
    fn penalties_can_go_negative() {
        let data = WalletActivityData {
            farming_count: 3,
            ..WalletActivityData::empty(now())
        };
        let r = engine().calculate_atomic_reputation(&data, now());
        assert_eq!(r.raw_score, -24);
        assert_eq!(r.adjusted_score, -24);
        assert_eq!(r.trust_level, TrustLevel::VeryLowTrust);
    }

    #[test]
    fn idempotent() {
        let e = engine();
        let a = e.calculate_atomic_reputation(&active_wallet(), now());
        let b = e.calculate_atomic_reputation(&active_wallet(), now());
        assert_eq!(a, b);
    }

    #[test]
    fn trust_level_uses_uncapped_score() {
        let e = ReputationEngine::new(EngineConfig::with_score_cap(100)).unwrap();
        let r = e.calculate_atomic_reputation(&active_wallet(), now());
        assert!(r.adjusted_score > 100);
        assert_eq!(r.trust_level, TrustLevel::Elite);
    }

    #[test]
    fn rejects_bad_config() {
        assert!(ReputationEngine::new(EngineConfig::with_score_cap(1)).is_err());
    }

    // --- breakdown ---

    #[test]
    fn breakdown_sums_match() {
        let r = engine().calculate_atomic_reputation(&active_wallet(), now());
        let b = r.breakdown();
        assert_eq!(b.len(), 7);
        assert_eq!(b.iter().map(|c| c.raw_points).sum::<i64>(), r.raw_score);
        assert_eq!(b.iter().map(|c| c.item_count).sum::<usize>(), r.all_items.len());
        assert_eq!(b[4].category, ScoreCategory::Staking);
        assert_eq!(b[4].raw_points, 10);
        let decayed: f64 = b.iter().map(|c| c.decayed_points).sum();
        assert!((decayed - r.adjusted_score as f64).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn result_json_shape() {
        let r = engine().calculate_atomic_reputation(&active_wallet(), now());
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("rawScore").is_some());
        assert!(json.get("adjustedScore").is_some());
        assert_eq!(json["staking"]["tier"], "long");
        assert!(json["externalPenalty"].get("totalPenalty").is_some());
        assert!(json["interaction"].get("totalPoints").is_some());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReputationEngine>();
        assert_send_sync::<AtomicReputationResult>();
    }
}
