use tend_core::constants::TREND_THRESHOLD;
use tend_core::Trend;

/// Classify the change between two scores. A move of exactly ±5 is stable.
pub fn determine_trend(current: u8, previous: u8) -> Trend {
    let diff = i32::from(current) - i32::from(previous);
    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
