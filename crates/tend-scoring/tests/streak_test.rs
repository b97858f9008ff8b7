use chrono::{DateTime, Duration, NaiveDate, Utc};
use tend_scoring::dates::{days_ago, midnight};
use tend_scoring::streak::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
}

/// Completion at `hour` o'clock, `n` days before the pinned today.
fn at(n: i64, hour: i64) -> DateTime<Utc> {
    midnight(today()) - Duration::days(n) + Duration::hours(hour)
}

#[test]
fn empty_history_has_no_streak() {
    assert_eq!(calculate_streak(&[]), 0);
    assert_eq!(calculate_longest_streak(&[]), 0);
}

#[test]
fn live_clock_basics() {
    assert_eq!(calculate_streak(&[days_ago(0)]), 1);
    assert_eq!(calculate_streak(&[days_ago(0), days_ago(1)]), 2);
    assert_eq!(calculate_streak(&[days_ago(2)]), 0);
}

#[test]
fn streak_survives_when_last_completion_was_yesterday() {
    assert_eq!(calculate_streak_on(&[at(1, 9), at(2, 9), at(3, 9)], today()), 3);
}

#[test]
fn stale_streak_is_zero() {
    assert_eq!(calculate_streak_on(&[at(2, 9), at(3, 9), at(4, 9)], today()), 0);
}

#[test]
fn consecutive_days_count_fully() {
    let completions: Vec<_> = (0..10).map(|n| at(n, 7)).collect();
    assert_eq!(calculate_streak_on(&completions, today()), 10);
}

#[test]
fn duplicate_days_neither_inflate_nor_break() {
    let single = calculate_streak_on(&[at(0, 8)], today());
    let doubled = calculate_streak_on(&[at(0, 8), at(0, 20)], today());
    assert_eq!(single, doubled);

    let with_dupes = [at(0, 8), at(0, 21), at(1, 6), at(1, 22), at(2, 12)];
    assert_eq!(calculate_streak_on(&with_dupes, today()), 3);
}

#[test]
fn gap_ends_the_current_streak() {
    let completions = [at(0, 9), at(1, 9), at(3, 9), at(4, 9), at(5, 9)];
    assert_eq!(calculate_streak_on(&completions, today()), 2);
}

#[test]
fn input_order_is_irrelevant_and_untouched() {
    let completions = vec![at(2, 9), at(0, 9), at(1, 9)];
    let before = completions.clone();
    assert_eq!(calculate_streak_on(&completions, today()), 3);
    assert_eq!(completions, before);
}

#[test]
fn longest_single_date_is_one() {
    assert_eq!(calculate_longest_streak(&[at(40, 9)]), 1);
}

#[test]
fn longest_takes_max_run_not_sum() {
    // Run of 3 (days 20..=18), gap, run of 4 (days 10..=7).
    let completions = [
        at(20, 9),
        at(19, 9),
        at(18, 9),
        at(10, 9),
        at(9, 9),
        at(8, 9),
        at(7, 9),
    ];
    assert_eq!(calculate_longest_streak(&completions), 4);
}

#[test]
fn longest_is_unaffected_by_a_broken_current_streak() {
    let completions: Vec<_> = (30..35).map(|n| at(n, 9)).collect();
    assert_eq!(calculate_streak_on(&completions, today()), 0);
    assert_eq!(calculate_longest_streak(&completions), 5);
}

#[test]
fn longest_ignores_same_day_duplicates() {
    let completions = [at(5, 1), at(5, 23), at(4, 12)];
    assert_eq!(calculate_longest_streak(&completions), 2);
}

#[test]
fn summary_combines_both_measures() {
    let completions = [at(0, 9), at(1, 9), at(5, 9), at(6, 9), at(7, 9)];
    let summary = StreakSummary::from_completions_on(&completions, today());
    assert_eq!(summary, StreakSummary { current: 2, longest: 3 });
}
