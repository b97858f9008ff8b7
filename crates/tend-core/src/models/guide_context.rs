use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::health::Trend;
use crate::constants::WEEK_DAYS;

/// Scored view of one life area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSnapshot {
    pub name: String,
    pub health_score: u8,
    pub practice_count: u32,
    /// Present only when a previous score was available to compare with.
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// Streak state of one practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSnapshot {
    pub name: String,
    #[serde(default)]
    pub life_area: Option<String>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// `None` if the practice has never been logged.
    #[serde(default)]
    pub days_since_last_log: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionSnapshot {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub life_area: Option<String>,
}

/// Everything the Garden Guide knows about a user at one point in time.
///
/// Reflections are expected newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideContext {
    /// The day this snapshot was taken.
    pub as_of: NaiveDate,
    pub average_health: u8,
    #[serde(default)]
    pub areas: Vec<AreaSnapshot>,
    #[serde(default)]
    pub practices: Vec<PracticeSnapshot>,
    #[serde(default)]
    pub reflections: Vec<ReflectionSnapshot>,
    #[serde(default)]
    pub days_since_last_reflection: Option<u32>,
}

impl GuideContext {
    /// Practices whose current streak is alive.
    pub fn active_streaks(&self) -> u32 {
        self.practices.iter().filter(|p| p.current_streak > 0).count() as u32
    }

    /// Reflections written within the trailing week, today inclusive.
    pub fn recent_reflections(&self) -> u32 {
        self.reflections
            .iter()
            .filter(|r| {
                let age = (self.as_of - r.created_at.date_naive()).num_days();
                (0..WEEK_DAYS).contains(&age)
            })
            .count() as u32
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            garden_health: self.average_health,
            active_streaks: self.active_streaks(),
            recent_reflections: self.recent_reflections(),
        }
    }
}

/// Compact context returned alongside every chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContextSummary {
    pub garden_health: u8,
    pub active_streaks: u32,
    pub recent_reflections: u32,
}
