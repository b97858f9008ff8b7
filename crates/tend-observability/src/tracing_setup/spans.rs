//! Span definitions per operation: scoring, insight generation, chat.

/// Create a scoring span around one area assessment.
#[macro_export]
macro_rules! scoring_span {
    ($area:expr) => {
        tracing::info_span!("tend.scoring", area = %$area)
    };
}

/// Create a guide span around one insight generation pass.
#[macro_export]
macro_rules! guide_span {
    ($area_count:expr, $practice_count:expr) => {
        tracing::info_span!(
            "tend.guide",
            areas = $area_count,
            practices = $practice_count
        )
    };
}

/// Create a chat span around one reply.
#[macro_export]
macro_rules! chat_span {
    ($history_len:expr) => {
        tracing::info_span!("tend.chat", history = $history_len)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "tend.scoring";
    pub const GUIDE: &str = "tend.guide";
    pub const CHAT: &str = "tend.chat";
}
