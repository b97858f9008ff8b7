//! # tend-scoring
//!
//! Pure calculators over plain dates and counts: day arithmetic, current and
//! longest streaks, life-area health scores, and score trends.
//! Nothing here performs I/O or keeps state between calls.

pub mod area;
pub mod dates;
pub mod health;
pub mod streak;

pub use area::{assess_area, assess_area_on, AreaAssessment, AreaLog, PracticeLog, PracticeStreaks};
pub use health::{
    calculate_health_score, calculate_health_score_with_breakdown, determine_trend,
    try_calculate_health_score, try_calculate_health_score_with_breakdown,
};
pub use streak::{calculate_longest_streak, calculate_streak, calculate_streak_on, StreakSummary};
