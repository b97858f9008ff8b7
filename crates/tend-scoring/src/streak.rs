//! Consecutive-day streak detection over completion timestamps.
//!
//! Completions are reduced to UTC calendar days, so several completions on
//! one day count once. Inputs are never reordered in place.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates;

/// Current and longest streak for one practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

impl StreakSummary {
    pub fn from_completions_on(completions: &[DateTime<Utc>], today: NaiveDate) -> Self {
        Self {
            current: calculate_streak_on(completions, today),
            longest: calculate_longest_streak(completions),
        }
    }
}

/// Current streak anchored to the current UTC day.
pub fn calculate_streak(completions: &[DateTime<Utc>]) -> u32 {
    calculate_streak_on(completions, dates::today())
}

/// Current streak anchored to `today`.
///
/// The streak is alive only if the latest completion was today or
/// yesterday; one missed day ends it.
pub fn calculate_streak_on(completions: &[DateTime<Utc>], today: NaiveDate) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = completions.iter().map(|c| c.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    if (today - days[0]).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        match (pair[0] - pair[1]).num_days() {
            0 => continue,
            1 => streak += 1,
            _ => break,
        }
    }

    tracing::debug!(streak, completions = completions.len(), "current streak");
    streak
}

/// Longest run of consecutive days anywhere in the history.
///
/// Independent of today: a broken streak does not shrink it.
pub fn calculate_longest_streak(completions: &[DateTime<Utc>]) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = completions.iter().map(|c| c.date_naive()).collect();
    days.sort_unstable();
    days.dedup();

    let mut longest = 1;
    let mut run = 1;
    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}
