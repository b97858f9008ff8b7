//! Keyword-routed chat replies.

pub mod intent;
pub mod responders;

pub use intent::{classify, ChatIntent, Route, ROUTES};
pub use responders::respond;
