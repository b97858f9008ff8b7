//! Mood trend detection over recent reflections.

/// Direction of a detected mood shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodShift {
    Improving,
    Declining,
}

/// Ordinal score of a mood label. Unknown labels sit in the middle.
pub fn mood_score(label: &str) -> u8 {
    match label.trim().to_ascii_lowercase().as_str() {
        "great" => 5,
        "good" => 4,
        "okay" | "neutral" => 3,
        "low" => 2,
        "difficult" => 1,
        _ => 3,
    }
}

/// Compare the newer half of `moods` (newest-first) against the older half.
///
/// The newer half takes the extra element when the count is odd. Needs at
/// least two moods; a mean difference within `threshold` is no shift.
pub fn detect_mood_shift<S: AsRef<str>>(moods: &[S], threshold: f64) -> Option<MoodShift> {
    if moods.len() < 2 {
        return None;
    }

    let split = moods.len().div_ceil(2);
    let (recent, older) = moods.split_at(split);
    let diff = mean_score(recent) - mean_score(older);

    if diff > threshold {
        Some(MoodShift::Improving)
    } else if diff < -threshold {
        Some(MoodShift::Declining)
    } else {
        None
    }
}

fn mean_score<S: AsRef<str>>(moods: &[S]) -> f64 {
    let total: u32 = moods.iter().map(|m| u32::from(mood_score(m.as_ref()))).sum();
    f64::from(total) / moods.len() as f64
}
