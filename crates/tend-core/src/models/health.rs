use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{TendError, TendResult};

/// Weekly engagement metrics for one life area.
///
/// `active_streaks <= total_practices` is a caller guarantee; only
/// [`HealthScoreInput::validate`] checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreInput {
    /// Fraction of expected completions logged this week, in [0, 1].
    pub weekly_completion_rate: f64,
    /// Practices with a live streak.
    pub active_streaks: u32,
    pub total_practices: u32,
    /// `None` when the area has never been reflected on.
    pub days_since_last_reflection: Option<u32>,
}

impl HealthScoreInput {
    /// Fail-fast precondition check.
    pub fn validate(&self) -> TendResult<()> {
        let rate = self.weekly_completion_rate;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(TendError::InvalidInput {
                field: "weeklyCompletionRate",
                reason: format!("{rate} is outside [0, 1]"),
            });
        }
        if self.active_streaks > self.total_practices {
            return Err(TendError::InvalidInput {
                field: "activeStreaks",
                reason: format!(
                    "{} active streaks exceed {} total practices",
                    self.active_streaks, self.total_practices
                ),
            });
        }
        Ok(())
    }
}

/// Health score with each component rounded individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthScoreResult {
    /// Capped sum of the rounded components, in [0, 100].
    pub total: u8,
    pub completion_score: u8,
    pub streak_bonus: u8,
    pub reflection_bonus: u8,
}

/// Direction of travel between two health-score snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
