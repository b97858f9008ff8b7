//! Builds a [`GuideContext`] from raw area and reflection history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tend_core::constants::NEUTRAL_HEALTH_SCORE;
use tend_core::models::{AreaSnapshot, PracticeSnapshot, ReflectionSnapshot};
use tend_core::GuideContext;
use tend_observability::scoring_span;
use tend_scoring::area::{assess_area_on, AreaLog};
use tend_scoring::dates;

/// A journal entry as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionLog {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub life_area: Option<String>,
}

/// Build the guide context as of the current UTC day.
pub fn build_context(areas: &[AreaLog], reflections: &[ReflectionLog]) -> GuideContext {
    build_context_on(areas, reflections, dates::today())
}

/// Build the guide context as of `today`.
pub fn build_context_on(
    areas: &[AreaLog],
    reflections: &[ReflectionLog],
    today: NaiveDate,
) -> GuideContext {
    let mut area_snapshots = Vec::with_capacity(areas.len());
    let mut practices = Vec::new();

    for area in areas {
        let _span = scoring_span!(area.name).entered();
        let assessment = assess_area_on(area, today);

        practices.extend(assessment.practices.iter().map(|p| PracticeSnapshot {
            name: p.name.clone(),
            life_area: Some(area.name.clone()),
            current_streak: p.current,
            longest_streak: p.longest,
            days_since_last_log: p.days_since_last_log,
        }));
        area_snapshots.push(AreaSnapshot {
            name: assessment.name,
            health_score: assessment.health_score,
            practice_count: assessment.input.total_practices,
            trend: assessment.trend,
        });
    }

    let mut reflection_snapshots: Vec<ReflectionSnapshot> = reflections
        .iter()
        .map(|r| ReflectionSnapshot {
            created_at: r.created_at,
            mood: r.mood.clone(),
            life_area: r.life_area.clone(),
        })
        .collect();
    reflection_snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let days_since_last_reflection = reflection_snapshots
        .first()
        .map(|r| u32::try_from(dates::days_between(r.created_at, today).max(0)).unwrap_or(u32::MAX));

    GuideContext {
        as_of: today,
        average_health: average_health(&area_snapshots),
        areas: area_snapshots,
        practices,
        reflections: reflection_snapshots,
        days_since_last_reflection,
    }
}

/// Rounded mean of area scores; neutral when there are no areas.
fn average_health(areas: &[AreaSnapshot]) -> u8 {
    if areas.is_empty() {
        return NEUTRAL_HEALTH_SCORE;
    }
    let sum: u32 = areas.iter().map(|a| u32::from(a.health_score)).sum();
    (f64::from(sum) / areas.len() as f64).round() as u8
}
