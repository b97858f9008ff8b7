//! # tend-guide
//!
//! The Garden Guide: turns a scored snapshot of a user's life areas,
//! practices, and reflections into prioritized insights and chat replies.
//! Everything is deterministic template and rule matching.

pub mod chat;
pub mod context;
pub mod engine;
pub mod insights;
pub mod milestones;

pub use chat::ChatIntent;
pub use context::{build_context, build_context_on, ReflectionLog};
pub use engine::GardenGuide;
pub use insights::{generate_insights, sort_by_priority};
