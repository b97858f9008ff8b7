use tend_core::constants::{COMPLETION_WEIGHT, STREAK_BONUS_CAP};

/// Linear share of the score earned by weekly completions. Range: 0 – 70.
pub fn completion_score(weekly_completion_rate: f64) -> f64 {
    weekly_completion_rate * COMPLETION_WEIGHT
}

/// Reward for how many practices carry a live streak. Range: 0 – 20.
pub fn streak_bonus(active_streaks: u32, total_practices: u32) -> f64 {
    if total_practices == 0 {
        return 0.0;
    }
    let ratio = f64::from(active_streaks) / f64::from(total_practices);
    (ratio * STREAK_BONUS_CAP).min(STREAK_BONUS_CAP)
}

/// Step function rewarding recent reflection. Range: 0 – 10.
pub fn reflection_bonus(days_since_last_reflection: Option<u32>) -> f64 {
    match days_since_last_reflection {
        None => 0.0,
        Some(0..=1) => 10.0,
        Some(2..=3) => 7.0,
        Some(4..=7) => 4.0,
        Some(_) => 1.0,
    }
}
