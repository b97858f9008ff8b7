//! Streak milestone lookups. Milestone lists are ascending.

/// Smallest milestone strictly above `streak`.
pub fn next_milestone(streak: u32, milestones: &[u32]) -> Option<u32> {
    milestones.iter().copied().find(|&m| m > streak)
}

/// The milestone `streak` is closing in on, if it is within `window` days
/// and not yet reached.
pub fn approaching_milestone(streak: u32, milestones: &[u32], window: u32) -> Option<u32> {
    next_milestone(streak, milestones).filter(|&m| m - streak <= window)
}
