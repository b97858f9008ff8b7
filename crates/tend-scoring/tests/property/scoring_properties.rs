use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::prelude::*;
use tend_core::HealthScoreInput;
use tend_scoring::dates::midnight;
use tend_scoring::health::{calculate_health_score, calculate_health_score_with_breakdown};
use tend_scoring::streak::{calculate_longest_streak, calculate_streak_on};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
}

fn completion(days_back: i64, minute: i64) -> DateTime<Utc> {
    midnight(today()) - Duration::days(days_back) + Duration::minutes(minute)
}

fn arb_completions() -> impl Strategy<Value = Vec<DateTime<Utc>>> {
    prop::collection::vec((0i64..60, 0i64..1440), 0..40)
        .prop_map(|v| v.into_iter().map(|(d, m)| completion(d, m)).collect())
}

fn arb_input() -> impl Strategy<Value = HealthScoreInput> {
    (0.0f64..=1.0, 0u32..20, prop::option::of(0u32..400)).prop_flat_map(|(rate, total, days)| {
        (0..=total).prop_map(move |active| HealthScoreInput {
            weekly_completion_rate: rate,
            active_streaks: active,
            total_practices: total,
            days_since_last_reflection: days,
        })
    })
}

proptest! {
    #[test]
    fn consecutive_run_from_today_has_its_length(n in 1i64..200) {
        let completions: Vec<_> = (0..n).map(|d| completion(d, 600)).collect();
        prop_assert_eq!(calculate_streak_on(&completions, today()), n as u32);
    }

    #[test]
    fn streak_is_order_independent(completions in arb_completions()) {
        let mut reversed = completions.clone();
        reversed.reverse();
        let mut rotated = completions.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }
        let expected = calculate_streak_on(&completions, today());
        prop_assert_eq!(calculate_streak_on(&reversed, today()), expected);
        prop_assert_eq!(calculate_streak_on(&rotated, today()), expected);
        prop_assert_eq!(calculate_longest_streak(&reversed), calculate_longest_streak(&completions));
    }

    #[test]
    fn duplicating_completions_changes_nothing(completions in arb_completions()) {
        let mut doubled = completions.clone();
        doubled.extend(completions.iter().map(|c| *c + Duration::seconds(1)));
        prop_assert_eq!(
            calculate_streak_on(&doubled, today()),
            calculate_streak_on(&completions, today())
        );
        prop_assert_eq!(calculate_longest_streak(&doubled), calculate_longest_streak(&completions));
    }

    #[test]
    fn current_never_exceeds_longest(completions in arb_completions()) {
        prop_assert!(calculate_streak_on(&completions, today()) <= calculate_longest_streak(&completions));
    }

    #[test]
    fn health_score_is_bounded(input in arb_input()) {
        let score = calculate_health_score(&input);
        prop_assert!(score <= 100);
        let breakdown = calculate_health_score_with_breakdown(&input);
        prop_assert!(breakdown.total <= 100);
    }

    #[test]
    fn rounding_policies_stay_within_one_point(input in arb_input()) {
        let simple = i32::from(calculate_health_score(&input));
        let split = i32::from(calculate_health_score_with_breakdown(&input).total);
        prop_assert!((simple - split).abs() <= 1);
    }

    #[test]
    fn more_recent_reflection_never_scores_lower(input in arb_input(), older in 0u32..400) {
        let mut recent = input;
        recent.days_since_last_reflection = Some(0);
        let mut stale = input;
        stale.days_since_last_reflection = Some(older);
        prop_assert!(calculate_health_score(&recent) >= calculate_health_score(&stale));
    }
}
