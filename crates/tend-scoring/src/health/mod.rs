//! Life-area health scoring.
//!
//! ```text
//! score = completionRate × 70
//!       + min(activeStreaks / totalPractices × 20, 20)
//!       + reflectionBonus(daysSinceLastReflection)
//! ```
//!
//! capped at 100. An area without practices scores a neutral 50.
//!
//! Two rounding policies coexist on purpose. [`calculate_health_score`]
//! rounds once on the combined value; [`calculate_health_score_with_breakdown`]
//! rounds each component and sums. For fractional inputs the two can differ
//! by one point.

pub mod formula;
mod trend;

pub use trend::determine_trend;

use tend_core::constants::{MAX_HEALTH_SCORE, NEUTRAL_HEALTH_SCORE};
use tend_core::{HealthScoreInput, HealthScoreResult, TendResult};

/// Health score in [0, 100], rounded once after summing.
pub fn calculate_health_score(input: &HealthScoreInput) -> u8 {
    if input.total_practices == 0 {
        return NEUTRAL_HEALTH_SCORE;
    }

    let raw = formula::completion_score(input.weekly_completion_rate)
        + formula::streak_bonus(input.active_streaks, input.total_practices)
        + formula::reflection_bonus(input.days_since_last_reflection);

    // Out-of-contract negative or NaN rates land on 0.
    raw.max(0.0).min(f64::from(MAX_HEALTH_SCORE)).round() as u8
}

/// Health score with every component rounded on its own.
///
/// The neutral case reports a total of 50 with all components at zero.
pub fn calculate_health_score_with_breakdown(input: &HealthScoreInput) -> HealthScoreResult {
    if input.total_practices == 0 {
        return HealthScoreResult {
            total: NEUTRAL_HEALTH_SCORE,
            completion_score: 0,
            streak_bonus: 0,
            reflection_bonus: 0,
        };
    }

    let completion_score = formula::completion_score(input.weekly_completion_rate).round() as u8;
    let streak_bonus =
        formula::streak_bonus(input.active_streaks, input.total_practices).round() as u8;
    let reflection_bonus =
        formula::reflection_bonus(input.days_since_last_reflection).round() as u8;

    let sum = u32::from(completion_score) + u32::from(streak_bonus) + u32::from(reflection_bonus);
    let total = sum.min(u32::from(MAX_HEALTH_SCORE)) as u8;

    tracing::debug!(
        total,
        completion_score,
        streak_bonus,
        reflection_bonus,
        "health score breakdown"
    );

    HealthScoreResult {
        total,
        completion_score,
        streak_bonus,
        reflection_bonus,
    }
}

/// [`calculate_health_score`] after [`HealthScoreInput::validate`].
pub fn try_calculate_health_score(input: &HealthScoreInput) -> TendResult<u8> {
    checked(input)?;
    Ok(calculate_health_score(input))
}

/// [`calculate_health_score_with_breakdown`] after [`HealthScoreInput::validate`].
pub fn try_calculate_health_score_with_breakdown(
    input: &HealthScoreInput,
) -> TendResult<HealthScoreResult> {
    checked(input)?;
    Ok(calculate_health_score_with_breakdown(input))
}

fn checked(input: &HealthScoreInput) -> TendResult<()> {
    input.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected health score input");
    })
}
