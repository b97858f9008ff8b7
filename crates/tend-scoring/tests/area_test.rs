use chrono::{DateTime, Duration, NaiveDate, Utc};
use tend_core::Trend;
use tend_scoring::area::*;
use tend_scoring::dates::midnight;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 20).unwrap()
}

fn at(n: i64) -> DateTime<Utc> {
    midnight(today()) - Duration::days(n) + Duration::hours(10)
}

fn practice(name: &str, days: &[i64]) -> PracticeLog {
    PracticeLog {
        name: name.into(),
        completions: days.iter().map(|&d| at(d)).collect(),
    }
}

#[test]
fn weekly_rate_counts_distinct_days_in_window() {
    // 7 days in window (0..=6), a duplicate on day 0, and day 7 outside it.
    let p = PracticeLog {
        name: "walk".into(),
        completions: vec![at(0), at(0), at(1), at(2), at(3), at(4), at(5), at(6), at(7)],
    };
    assert_eq!(weekly_completion_rate_on(&[p], today()), 1.0);
}

#[test]
fn weekly_rate_averages_over_practices() {
    let a = practice("walk", &[0, 1, 2, 3, 4, 5, 6]);
    let b = practice("read", &[]);
    assert_eq!(weekly_completion_rate_on(&[a, b], today()), 0.5);
}

#[test]
fn weekly_rate_for_empty_area_is_zero() {
    assert_eq!(weekly_completion_rate_on(&[], today()), 0.0);
}

#[test]
fn days_since_last_log_uses_latest_completion() {
    assert_eq!(days_since_last_log_on(&[at(9), at(4), at(6)], today()), Some(4));
    assert_eq!(days_since_last_log_on(&[], today()), None);
}

#[test]
fn health_input_counts_live_streaks() {
    let area = AreaLog {
        name: "Health".into(),
        practices: vec![
            practice("walk", &[0, 1, 2]),
            practice("stretch", &[1]),
            practice("swim", &[5, 6]),
        ],
        last_reflection: Some(at(2)),
        previous_score: None,
    };
    let input = health_input_on(&area, today());
    assert_eq!(input.total_practices, 3);
    assert_eq!(input.active_streaks, 2);
    assert_eq!(input.days_since_last_reflection, Some(2));
    assert!((input.weekly_completion_rate - 6.0 / 21.0).abs() < 1e-9);
}

#[test]
fn assess_area_scores_and_tracks_trend() {
    let area = AreaLog {
        name: "Health".into(),
        practices: vec![practice("walk", &[0, 1, 2, 3, 4, 5, 6])],
        last_reflection: Some(at(0)),
        previous_score: Some(60),
    };
    let assessment = assess_area_on(&area, today());
    assert_eq!(assessment.health_score, 100);
    assert_eq!(assessment.breakdown.total, 100);
    assert_eq!(assessment.trend, Some(Trend::Improving));
    assert_eq!(assessment.practices.len(), 1);
    assert_eq!(assessment.practices[0].current, 7);
    assert_eq!(assessment.practices[0].longest, 7);
    assert_eq!(assessment.practices[0].days_since_last_log, Some(0));
}

#[test]
fn assess_empty_area_is_neutral_without_trend() {
    let area = AreaLog {
        name: "Career".into(),
        ..Default::default()
    };
    let assessment = assess_area_on(&area, today());
    assert_eq!(assessment.health_score, 50);
    assert_eq!(assessment.trend, None);
    assert!(assessment.practices.is_empty());
}
