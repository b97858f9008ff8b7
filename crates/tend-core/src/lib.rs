//! # tend-core
//!
//! Foundation crate for the Tend engines.
//! Defines the value types, errors, config, and constants shared by
//! `tend-scoring` and `tend-guide`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::TendConfig;
pub use errors::{TendError, TendResult};
pub use models::{
    ContextSummary, GuideContext, HealthScoreInput, HealthScoreResult, Insight, InsightPriority,
    InsightType, Trend,
};
