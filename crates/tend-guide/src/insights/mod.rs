//! Insight generation: a fixed sequence of independent rules, each adding
//! at most one insight, followed by a stable priority sort.

pub mod mood;
pub mod rules;

use tend_core::config::GuideConfig;
use tend_core::{GuideContext, Insight};

/// Rules in evaluation order. Ties after sorting keep this order.
const RULES: &[fn(&GuideContext, &GuideConfig) -> Option<Insight>] = &[
    rules::celebrate_thriving_areas,
    rules::celebrate_long_streak,
    rules::suggest_lowest_area,
    rules::suggest_empty_areas,
    rules::encourage_dormant_practices,
    rules::encourage_milestone,
    rules::observe_mood_trend,
    rules::nudge_reflection,
];

/// Run every rule and return the insights high priority first.
pub fn generate_insights(ctx: &GuideContext, config: &GuideConfig) -> Vec<Insight> {
    let mut insights: Vec<Insight> = RULES.iter().filter_map(|rule| rule(ctx, config)).collect();
    sort_by_priority(&mut insights);
    insights
}

/// Stable sort: `high`, then `medium`, then `low`.
pub fn sort_by_priority(insights: &mut [Insight]) {
    insights.sort_by_key(|i| i.priority);
}
