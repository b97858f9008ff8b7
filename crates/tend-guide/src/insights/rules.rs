//! Individual insight rules. Each looks at one aspect of the context and
//! returns at most one insight.

use tend_core::config::GuideConfig;
use tend_core::models::{AreaSnapshot, PracticeSnapshot};
use tend_core::{GuideContext, Insight, InsightPriority, InsightType};

use super::mood::{detect_mood_shift, MoodShift};
use crate::milestones::approaching_milestone;

/// Areas with practices scoring at or above the thriving threshold.
pub fn thriving_areas<'a>(ctx: &'a GuideContext, config: &GuideConfig) -> Vec<&'a AreaSnapshot> {
    let mut areas: Vec<&AreaSnapshot> = ctx
        .areas
        .iter()
        .filter(|a| a.practice_count > 0 && a.health_score >= config.thriving_threshold)
        .collect();
    areas.sort_by(|a, b| b.health_score.cmp(&a.health_score));
    areas
}

/// Areas with practices scoring below the struggling threshold, lowest first.
pub fn struggling_areas<'a>(ctx: &'a GuideContext, config: &GuideConfig) -> Vec<&'a AreaSnapshot> {
    let mut areas: Vec<&AreaSnapshot> = ctx
        .areas
        .iter()
        .filter(|a| a.practice_count > 0 && a.health_score < config.struggling_threshold)
        .collect();
    areas.sort_by_key(|a| a.health_score);
    areas
}

/// Practice with the longest live streak; the earliest wins ties.
pub fn best_streak(ctx: &GuideContext) -> Option<&PracticeSnapshot> {
    ctx.practices
        .iter()
        .filter(|p| p.current_streak > 0)
        .reduce(|best, p| if p.current_streak > best.current_streak { p } else { best })
}

pub fn celebrate_thriving_areas(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let thriving = thriving_areas(ctx, config);
    match thriving.as_slice() {
        [] => None,
        [area] => Some(
            Insight::new(
                InsightType::Celebration,
                InsightPriority::Medium,
                format!("{} is flourishing", area.name),
                format!(
                    "{} is at {}/100. Whatever you're doing there is working.",
                    area.name, area.health_score
                ),
            )
            .for_area(&area.name),
        ),
        many => Some(Insight::new(
            InsightType::Celebration,
            InsightPriority::Medium,
            format!("{} areas are flourishing", many.len()),
            format!(
                "{} are all thriving. Your garden is in bloom.",
                join_names(many.iter().map(|a| a.name.as_str()))
            ),
        )),
    }
}

pub fn celebrate_long_streak(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let best = best_streak(ctx).filter(|p| p.current_streak >= config.long_streak_days)?;
    let insight = Insight::new(
        InsightType::Celebration,
        InsightPriority::High,
        format!("{}-day streak!", best.current_streak),
        format!(
            "You've kept up {} for {} days in a row.",
            best.name, best.current_streak
        ),
    );
    Some(with_area(insight, best.life_area.as_deref()))
}

pub fn suggest_lowest_area(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let lowest = *struggling_areas(ctx, config).first()?;
    Some(
        Insight::new(
            InsightType::Suggestion,
            InsightPriority::High,
            format!("{} could use some care", lowest.name),
            format!(
                "{} is at {}/100. Pick one small practice there and log it today.",
                lowest.name, lowest.health_score
            ),
        )
        .for_area(&lowest.name),
    )
}

pub fn suggest_empty_areas(ctx: &GuideContext, _config: &GuideConfig) -> Option<Insight> {
    let empty: Vec<&AreaSnapshot> = ctx.areas.iter().filter(|a| a.practice_count == 0).collect();
    match empty.as_slice() {
        [] => None,
        [area] => Some(
            Insight::new(
                InsightType::Suggestion,
                InsightPriority::Low,
                format!("Plant something in {}", area.name),
                format!(
                    "{} has no practices yet. Adding one small habit gives it room to grow.",
                    area.name
                ),
            )
            .for_area(&area.name),
        ),
        many => Some(Insight::new(
            InsightType::Suggestion,
            InsightPriority::Low,
            format!("{} areas have no practices", many.len()),
            format!(
                "{} have no practices yet. Adding one small habit to each gives them room to grow.",
                join_names(many.iter().map(|a| a.name.as_str()))
            ),
        )),
    }
}

pub fn encourage_dormant_practices(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let dormant: Vec<&PracticeSnapshot> = ctx
        .practices
        .iter()
        .filter(|p| {
            p.days_since_last_log
                .map_or(true, |d| d >= config.dormant_after_days)
        })
        .collect();

    match dormant.as_slice() {
        [] => None,
        [practice] => {
            let message = match practice.days_since_last_log {
                Some(days) => format!(
                    "It's been {} since you logged {}. One small step today gets it going again.",
                    plural_days(days),
                    practice.name
                ),
                None => format!(
                    "You haven't logged {} yet. Today is a good day to start.",
                    practice.name
                ),
            };
            let insight = Insight::new(
                InsightType::Encouragement,
                InsightPriority::Medium,
                format!("Time to revisit {}", practice.name),
                message,
            );
            Some(with_area(insight, practice.life_area.as_deref()))
        }
        many => Some(Insight::new(
            InsightType::Encouragement,
            InsightPriority::Medium,
            format!("{} practices are resting", many.len()),
            format!(
                "{} haven't been logged recently. Pick one to pick back up today.",
                join_names(many.iter().map(|p| p.name.as_str()))
            ),
        )),
    }
}

pub fn encourage_milestone(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let (practice, milestone) = ctx
        .practices
        .iter()
        .filter(|p| p.current_streak > 0)
        .filter_map(|p| {
            approaching_milestone(
                p.current_streak,
                &config.milestones,
                config.milestone_window_days,
            )
            .map(|m| (p, m))
        })
        .reduce(|best, next| {
            if next.1 - next.0.current_streak < best.1 - best.0.current_streak {
                next
            } else {
                best
            }
        })?;

    let remaining = milestone - practice.current_streak;
    let insight = Insight::new(
        InsightType::Encouragement,
        InsightPriority::Medium,
        format!("{milestone}-day milestone ahead"),
        format!(
            "{} is on a {}-day streak, {} from {}. Keep going!",
            practice.name,
            practice.current_streak,
            plural_days(remaining),
            milestone
        ),
    );
    Some(with_area(insight, practice.life_area.as_deref()))
}

pub fn observe_mood_trend(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    let mut dated: Vec<_> = ctx
        .reflections
        .iter()
        .filter_map(|r| r.mood.as_deref().map(|m| (r.created_at, m)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    let moods: Vec<&str> = dated
        .into_iter()
        .take(config.mood_sample_size)
        .map(|(_, m)| m)
        .collect();

    match detect_mood_shift(&moods, config.mood_shift_threshold)? {
        MoodShift::Improving => Some(Insight::new(
            InsightType::Observation,
            InsightPriority::Low,
            "Your mood is lifting",
            "Your recent reflections read brighter than the ones before. Notice what's been helping.",
        )),
        MoodShift::Declining => Some(Insight::new(
            InsightType::Observation,
            InsightPriority::Medium,
            "Your mood has dipped",
            "Your recent reflections have been heavier than before. Be gentle with yourself and lean on what usually helps.",
        )),
    }
}

pub fn nudge_reflection(ctx: &GuideContext, config: &GuideConfig) -> Option<Insight> {
    match ctx.days_since_last_reflection {
        Some(days) if days > config.reflection_nudge_days => Some(Insight::new(
            InsightType::Suggestion,
            InsightPriority::Low,
            "Take a moment to reflect",
            format!(
                "It's been {} since your last reflection. A few lines about your week can show you what's working.",
                plural_days(days)
            ),
        )),
        None if !ctx.practices.is_empty() => Some(Insight::new(
            InsightType::Suggestion,
            InsightPriority::Low,
            "Start your journal",
            "You haven't written a reflection yet. A few lines about your week can show you what's working.",
        )),
        _ => None,
    }
}

fn with_area(insight: Insight, area: Option<&str>) -> Insight {
    match area {
        Some(area) => insight.for_area(area),
        None => insight,
    }
}

/// "1 day", "3 days".
pub(crate) fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// "A", "A and B", "A, B and C".
pub(crate) fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
