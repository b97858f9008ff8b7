mod chat;
mod guide_context;
mod health;
mod insight;

pub use chat::{ChatReply, ChatRole, ChatTurn};
pub use guide_context::{
    AreaSnapshot, ContextSummary, GuideContext, PracticeSnapshot, ReflectionSnapshot,
};
pub use health::{HealthScoreInput, HealthScoreResult, Trend};
pub use insight::{Insight, InsightPriority, InsightType};
