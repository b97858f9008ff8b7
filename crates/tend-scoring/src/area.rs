//! Turns raw per-area completion and reflection history into a health score.

use chrono::{DateTime, NaiveDate, Utc};
use tend_core::constants::WEEK_DAYS;
use tend_core::{HealthScoreInput, HealthScoreResult, Trend};

use crate::dates;
use crate::health;
use crate::streak::StreakSummary;

/// Completion history of one practice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PracticeLog {
    pub name: String,
    pub completions: Vec<DateTime<Utc>>,
}

/// Raw history of one life area, as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaLog {
    pub name: String,
    pub practices: Vec<PracticeLog>,
    pub last_reflection: Option<DateTime<Utc>>,
    /// Score stored at the previous snapshot, if any.
    pub previous_score: Option<u8>,
}

/// Streak state of one practice as of the assessment day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeStreaks {
    pub name: String,
    pub current: u32,
    pub longest: u32,
    pub days_since_last_log: Option<u32>,
}

/// Scored life area.
///
/// `health_score` is the single-rounding score; `breakdown` rounds per
/// component and may differ from it by one point.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaAssessment {
    pub name: String,
    pub input: HealthScoreInput,
    pub health_score: u8,
    pub breakdown: HealthScoreResult,
    pub trend: Option<Trend>,
    pub practices: Vec<PracticeStreaks>,
}

/// Share of the trailing week's practice-days that were completed.
///
/// Each practice contributes at most one completion per day. Returns 0 for
/// an area without practices.
pub fn weekly_completion_rate_on(practices: &[PracticeLog], today: NaiveDate) -> f64 {
    if practices.is_empty() {
        return 0.0;
    }

    let completed_days: usize = practices
        .iter()
        .map(|p| {
            let mut days: Vec<NaiveDate> = p
                .completions
                .iter()
                .map(|c| c.date_naive())
                .filter(|d| (0..WEEK_DAYS).contains(&(today - *d).num_days()))
                .collect();
            days.sort_unstable();
            days.dedup();
            days.len()
        })
        .sum();

    let possible = practices.len() as f64 * WEEK_DAYS as f64;
    (completed_days as f64 / possible).clamp(0.0, 1.0)
}

/// Days since the most recent completion, `None` if never completed.
/// Future completions count as today.
pub fn days_since_last_log_on(completions: &[DateTime<Utc>], today: NaiveDate) -> Option<u32> {
    completions
        .iter()
        .map(|c| dates::days_between(*c, today))
        .min()
        .map(non_negative_days)
}

/// Build the scoring input for an area as of `today`.
pub fn health_input_on(area: &AreaLog, today: NaiveDate) -> HealthScoreInput {
    let active_streaks = area
        .practices
        .iter()
        .filter(|p| crate::streak::calculate_streak_on(&p.completions, today) > 0)
        .count() as u32;

    HealthScoreInput {
        weekly_completion_rate: weekly_completion_rate_on(&area.practices, today),
        active_streaks,
        total_practices: area.practices.len() as u32,
        days_since_last_reflection: area
            .last_reflection
            .map(|r| non_negative_days(dates::days_between(r, today))),
    }
}

/// Score an area against the current UTC day.
pub fn assess_area(area: &AreaLog) -> AreaAssessment {
    assess_area_on(area, dates::today())
}

/// Score an area against a pinned `today`.
pub fn assess_area_on(area: &AreaLog, today: NaiveDate) -> AreaAssessment {
    let input = health_input_on(area, today);
    let health_score = health::calculate_health_score(&input);
    let breakdown = health::calculate_health_score_with_breakdown(&input);
    let trend = area
        .previous_score
        .map(|previous| health::determine_trend(health_score, previous));

    let practices = area
        .practices
        .iter()
        .map(|p| {
            let streaks = StreakSummary::from_completions_on(&p.completions, today);
            PracticeStreaks {
                name: p.name.clone(),
                current: streaks.current,
                longest: streaks.longest,
                days_since_last_log: days_since_last_log_on(&p.completions, today),
            }
        })
        .collect();

    tracing::debug!(
        area = %area.name,
        health_score,
        active_streaks = input.active_streaks,
        total_practices = input.total_practices,
        "assessed life area"
    );

    AreaAssessment {
        name: area.name.clone(),
        input,
        health_score,
        breakdown,
        trend,
        practices,
    }
}

fn non_negative_days(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
