use tend_guide::insights::mood::*;

#[test]
fn mood_scores_by_label() {
    assert_eq!(mood_score("great"), 5);
    assert_eq!(mood_score("good"), 4);
    assert_eq!(mood_score("okay"), 3);
    assert_eq!(mood_score("neutral"), 3);
    assert_eq!(mood_score("low"), 2);
    assert_eq!(mood_score("difficult"), 1);
    assert_eq!(mood_score("Great "), 5);
    assert_eq!(mood_score("ecstatic"), 3);
}

#[test]
fn fewer_than_two_moods_never_trend() {
    assert_eq!(detect_mood_shift::<&str>(&[], 0.5), None);
    assert_eq!(detect_mood_shift(&["great"], 0.5), None);
}

#[test]
fn two_moods_compare_directly() {
    assert_eq!(detect_mood_shift(&["great", "low"], 0.5), Some(MoodShift::Improving));
    assert_eq!(detect_mood_shift(&["low", "great"], 0.5), Some(MoodShift::Declining));
}

#[test]
fn odd_count_gives_recent_half_the_extra_mood() {
    // recent = [good, good] -> 4.0, older = [okay] -> 3.0
    assert_eq!(
        detect_mood_shift(&["good", "good", "okay"], 0.5),
        Some(MoodShift::Improving)
    );
    // recent = [good, low] -> 3.0, older = [okay] -> 3.0
    assert_eq!(detect_mood_shift(&["good", "low", "okay"], 0.5), None);
}

#[test]
fn shift_of_exactly_threshold_is_ignored() {
    // recent = [good, okay] -> 3.5, older = [okay, okay] -> 3.0
    assert_eq!(detect_mood_shift(&["good", "okay", "okay", "okay"], 0.5), None);
    // recent = [good, good] -> 4.0, older = [okay, good] -> 3.5
    assert_eq!(detect_mood_shift(&["good", "good", "okay", "good"], 0.5), None);
}

#[test]
fn unknown_labels_count_as_neutral() {
    assert_eq!(detect_mood_shift(&["meh", "okay"], 0.5), None);
}
