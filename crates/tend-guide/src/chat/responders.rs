//! Template responders, one per [`ChatIntent`].

use tend_core::config::GuideConfig;
use tend_core::models::ChatTurn;
use tend_core::GuideContext;

use super::intent::ChatIntent;
use crate::insights::rules::{best_streak, join_names, plural_days, struggling_areas, thriving_areas};
use crate::milestones::next_milestone;

/// Produce the reply for an already-classified message.
pub fn respond(
    intent: ChatIntent,
    ctx: &GuideContext,
    config: &GuideConfig,
    history: &[ChatTurn],
) -> String {
    match intent {
        ChatIntent::Status => status(ctx, config),
        ChatIntent::Suggestion => suggestion(ctx, config),
        ChatIntent::Streak => streak(ctx, config),
        ChatIntent::Help => help(ctx, config),
        ChatIntent::Default => fallback(history),
    }
}

fn status(ctx: &GuideContext, config: &GuideConfig) -> String {
    let mut reply = format!("Your garden is at {}/100 overall.", ctx.average_health);

    let thriving = thriving_areas(ctx, config);
    if !thriving.is_empty() {
        reply.push_str(&format!(
            " {} {} thriving.",
            join_names(thriving.iter().map(|a| a.name.as_str())),
            if thriving.len() == 1 { "is" } else { "are" }
        ));
    }

    let struggling = struggling_areas(ctx, config);
    if !struggling.is_empty() {
        reply.push_str(&format!(
            " {} could use more attention.",
            join_names(struggling.iter().map(|a| a.name.as_str()))
        ));
    }

    let active = ctx.active_streaks();
    reply.push_str(&format!(
        " You have {} active {}.",
        active,
        if active == 1 { "streak" } else { "streaks" }
    ));
    reply
}

fn suggestion(ctx: &GuideContext, config: &GuideConfig) -> String {
    if let Some(area) = struggling_areas(ctx, config).first() {
        return format!(
            "{} is at {}/100, so that's where a little care goes furthest. Choose the easiest practice there and do it today, even briefly.",
            area.name, area.health_score
        );
    }
    if let Some(area) = ctx.areas.iter().find(|a| a.practice_count == 0) {
        return format!(
            "{} doesn't have any practices yet. Try adding one small habit there, something you could do in five minutes.",
            area.name
        );
    }
    "Your garden looks balanced. A short reflection on what's working could help you keep it that way.".to_string()
}

fn streak(ctx: &GuideContext, config: &GuideConfig) -> String {
    let Some(best) = best_streak(ctx) else {
        return "You don't have an active streak right now. Log any practice today to start one.".to_string();
    };

    let mut reply = format!(
        "Your strongest streak is {} on {}, and you have {} active {} in total.",
        plural_days(best.current_streak),
        best.name,
        ctx.active_streaks(),
        if ctx.active_streaks() == 1 { "streak" } else { "streaks" }
    );
    if let Some(milestone) = next_milestone(best.current_streak, &config.milestones) {
        reply.push_str(&format!(
            " Next milestone: {} days, {} to go.",
            milestone,
            plural_days(milestone - best.current_streak)
        ));
    }
    reply
}

fn help(ctx: &GuideContext, config: &GuideConfig) -> String {
    let mut reply =
        "It's okay to have hard stretches. Pick the smallest practice you have and do just that today.".to_string();
    if let Some(area) = thriving_areas(ctx, config).first() {
        reply.push_str(&format!(
            " Remember that {} is doing well, so you already know how to grow something.",
            area.name
        ));
    }
    reply
}

fn fallback(history: &[ChatTurn]) -> String {
    if history.is_empty() {
        "Hi, I'm your Garden Guide. Ask me how you're doing, what to focus on, or about your streaks.".to_string()
    } else {
        "I can tell you how your garden is doing, suggest where to focus, or check on your streaks. What would help most?".to_string()
    }
}
