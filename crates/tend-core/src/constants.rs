/// Tend core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score given to a life area with no practices to measure.
pub const NEUTRAL_HEALTH_SCORE: u8 = 50;

/// Upper bound of every health score.
pub const MAX_HEALTH_SCORE: u8 = 100;

/// Points awarded for a 100% weekly completion rate.
pub const COMPLETION_WEIGHT: f64 = 70.0;

/// Cap on the streak-breadth bonus.
pub const STREAK_BONUS_CAP: f64 = 20.0;

/// Score delta (exclusive) beyond which a trend is no longer stable.
pub const TREND_THRESHOLD: i32 = 5;

/// Length of the trailing window used for weekly completion rates.
pub const WEEK_DAYS: i64 = 7;

/// Streak lengths worth celebrating.
pub const STREAK_MILESTONES: [u32; 7] = [7, 14, 21, 30, 60, 90, 100];
