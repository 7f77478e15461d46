//! In-app engagement: check-ins, ad bonuses, report views, tool usage.

use chrono::{DateTime, Utc};
use rep_core::traits::TimestampPolicy;
use rep_core::types::{clamp_count, ScoreAction, ScoreItem};
use serde::{Deserialize, Serialize};

use super::{emit, sum_points};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    pub daily_check_ins: u64,
    pub ad_bonuses: u64,
    pub report_views: u64,
    pub tool_usage: u64,
    pub total_points: i64,
    pub items: Vec<ScoreItem>,
}

pub fn score_interaction(
    daily_check_ins: i64,
    ad_bonuses: i64,
    report_views: i64,
    tool_usage: i64,
    policy: &dyn TimestampPolicy,
    now: DateTime<Utc>,
) -> InteractionResult {
    let daily_check_ins = clamp_count(daily_check_ins, "daily_check_ins");
    let ad_bonuses = clamp_count(ad_bonuses, "ad_bonuses");
    let report_views = clamp_count(report_views, "report_views");
    let tool_usage = clamp_count(tool_usage, "tool_usage");

    let mut items = Vec::new();
    emit(&mut items, ScoreAction::DailyCheckIn, daily_check_ins, policy, now);
    emit(&mut items, ScoreAction::AdBonus, ad_bonuses, policy, now);
    emit(&mut items, ScoreAction::ReportView, report_views, policy, now);
    emit(&mut items, ScoreAction::ToolUsage, tool_usage, policy, now);

    InteractionResult {
        daily_check_ins,
        ad_bonuses,
        report_views,
        tool_usage,
        total_points: sum_points(&items),
        items,
    }
}
