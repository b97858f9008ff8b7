//! Message classification by case-insensitive substring match.
//!
//! Routes are checked top to bottom and the first hit wins, so a message
//! matching several groups resolves to the earliest one.

/// What a chat message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatIntent {
    Status,
    Suggestion,
    Streak,
    Help,
    Default,
}

/// A keyword group and the intent it selects.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub intent: ChatIntent,
    pub keywords: &'static [&'static str],
}

impl Route {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered routing table. Anything unmatched is [`ChatIntent::Default`].
pub const ROUTES: &[Route] = &[
    Route {
        intent: ChatIntent::Status,
        keywords: &["how am i doing", "how is my garden", "status", "overview", "summary"],
    },
    Route {
        intent: ChatIntent::Suggestion,
        keywords: &["suggest", "recommend", "what should i", "advice", "idea"],
    },
    Route {
        intent: ChatIntent::Streak,
        keywords: &["streak", "progress", "consistent", "milestone"],
    },
    Route {
        intent: ChatIntent::Help,
        keywords: &["help", "struggling", "stuck", "hard", "difficult", "overwhelmed"],
    },
];

pub fn classify(message: &str) -> ChatIntent {
    let lowered = message.to_lowercase();
    ROUTES
        .iter()
        .find(|route| route.matches(&lowered))
        .map_or(ChatIntent::Default, |route| route.intent)
}
