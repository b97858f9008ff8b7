use chrono::NaiveDate;
use tend_core::config::GuideConfig;
use tend_core::models::{ChatReply, ChatTurn};
use tend_core::{GuideContext, Insight, TendResult};
use tend_observability::{chat_span, guide_span};
use tend_scoring::area::AreaLog;

use crate::chat;
use crate::context::{self, ReflectionLog};
use crate::insights;

/// Garden Guide engine: context building, insights, and chat replies
/// under one configuration.
#[derive(Debug, Clone, Default)]
pub struct GardenGuide {
    config: GuideConfig,
}

impl GardenGuide {
    /// Create a guide with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration. Rejects invalid settings.
    pub fn with_config(config: GuideConfig) -> TendResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Score raw history into a context snapshot as of `today`.
    pub fn build_context_on(
        &self,
        areas: &[AreaLog],
        reflections: &[ReflectionLog],
        today: NaiveDate,
    ) -> GuideContext {
        context::build_context_on(areas, reflections, today)
    }

    /// Prioritized insights for the snapshot.
    pub fn insights(&self, ctx: &GuideContext) -> Vec<Insight> {
        let _span = guide_span!(ctx.areas.len(), ctx.practices.len()).entered();
        let insights = insights::generate_insights(ctx, &self.config);
        tracing::info!(count = insights.len(), "generated insights");
        insights
    }

    /// Reply to a chat message. Only the last `history_window` turns of
    /// `history` are considered.
    pub fn chat(&self, message: &str, history: &[ChatTurn], ctx: &GuideContext) -> ChatReply {
        let start = history.len().saturating_sub(self.config.history_window);
        let window = &history[start..];
        let _span = chat_span!(window.len()).entered();

        let intent = chat::classify(message);
        tracing::info!(?intent, "chat intent resolved");

        ChatReply {
            reply: chat::respond(intent, ctx, &self.config, window),
            context: ctx.summary(),
        }
    }
}
