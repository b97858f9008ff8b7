use crate::constants::STREAK_MILESTONES;

// Guide
pub const DEFAULT_THRIVING_THRESHOLD: u8 = 70;
pub const DEFAULT_STRUGGLING_THRESHOLD: u8 = 40;
pub const DEFAULT_LONG_STREAK_DAYS: u32 = 7;
pub const DEFAULT_DORMANT_AFTER_DAYS: u32 = 3;
pub const DEFAULT_MILESTONE_WINDOW_DAYS: u32 = 3;
pub const DEFAULT_MOOD_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_MOOD_SHIFT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_REFLECTION_NUDGE_DAYS: u32 = 7;
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

pub fn default_milestones() -> Vec<u32> {
    STREAK_MILESTONES.to_vec()
}

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
