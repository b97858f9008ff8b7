use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{TendError, TendResult};

/// Garden Guide thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Areas scoring at or above this are thriving.
    pub thriving_threshold: u8,
    /// Areas scoring below this are struggling.
    pub struggling_threshold: u8,
    /// Streak length that earns a celebration.
    pub long_streak_days: u32,
    /// Days without a log before a practice counts as dormant.
    pub dormant_after_days: u32,
    /// How close (in days) a streak must be to a milestone to be "approaching".
    pub milestone_window_days: u32,
    /// Ascending streak milestones.
    pub milestones: Vec<u32>,
    /// Most recent reflections considered for mood trends.
    pub mood_sample_size: usize,
    /// Mean mood difference (exclusive) that counts as a shift.
    pub mood_shift_threshold: f64,
    /// Days without a reflection before nudging.
    pub reflection_nudge_days: u32,
    /// Prior chat turns kept when replying.
    pub history_window: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            thriving_threshold: defaults::DEFAULT_THRIVING_THRESHOLD,
            struggling_threshold: defaults::DEFAULT_STRUGGLING_THRESHOLD,
            long_streak_days: defaults::DEFAULT_LONG_STREAK_DAYS,
            dormant_after_days: defaults::DEFAULT_DORMANT_AFTER_DAYS,
            milestone_window_days: defaults::DEFAULT_MILESTONE_WINDOW_DAYS,
            milestones: defaults::default_milestones(),
            mood_sample_size: defaults::DEFAULT_MOOD_SAMPLE_SIZE,
            mood_shift_threshold: defaults::DEFAULT_MOOD_SHIFT_THRESHOLD,
            reflection_nudge_days: defaults::DEFAULT_REFLECTION_NUDGE_DAYS,
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl GuideConfig {
    pub fn validate(&self) -> TendResult<()> {
        if self.struggling_threshold >= self.thriving_threshold {
            return Err(TendError::ConfigError(format!(
                "guide.struggling_threshold ({}) must be below guide.thriving_threshold ({})",
                self.struggling_threshold, self.thriving_threshold
            )));
        }
        if self.milestones.is_empty() {
            return Err(TendError::ConfigError(
                "guide.milestones must not be empty".into(),
            ));
        }
        if self.milestones.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TendError::ConfigError(
                "guide.milestones must be strictly ascending".into(),
            ));
        }
        if self.mood_shift_threshold.is_nan() || self.mood_shift_threshold <= 0.0 {
            return Err(TendError::ConfigError(format!(
                "guide.mood_shift_threshold must be positive, got {}",
                self.mood_shift_threshold
            )));
        }
        Ok(())
    }
}
