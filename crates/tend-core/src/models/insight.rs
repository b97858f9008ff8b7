use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category of a Garden Guide insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InsightType {
    Celebration,
    Encouragement,
    Suggestion,
    Observation,
}

/// Display priority. Ordering is `High < Medium < Low`, so an ascending
/// sort puts the most important insights first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

/// A short coaching message. Generated per request, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub life_area: Option<String>,
    pub priority: InsightPriority,
}

impl Insight {
    pub fn new(
        kind: InsightType,
        priority: InsightPriority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            life_area: None,
            priority,
        }
    }

    /// Attach the life area this insight is about.
    pub fn for_area(mut self, area: impl Into<String>) -> Self {
        self.life_area = Some(area.into());
        self
    }
}
