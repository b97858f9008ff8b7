//! Golden scenarios: full insight output and context summaries for
//! representative gardens.

use serde::Deserialize;
use tend_core::{ContextSummary, GuideContext, InsightPriority, InsightType};
use tend_guide::{ChatIntent, GardenGuide};
use test_fixtures::{list_fixtures, load_fixture, relative_fixture_path};

#[derive(Debug, Deserialize)]
struct ExpectedInsight {
    #[serde(rename = "type")]
    kind: InsightType,
    priority: InsightPriority,
    title: String,
    #[serde(rename = "lifeArea", default)]
    life_area: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GuideScenario {
    description: String,
    context: GuideContext,
    expected_insights: Vec<ExpectedInsight>,
    expected_summary: ContextSummary,
}

#[derive(Debug, Deserialize)]
struct RoutingCase {
    message: String,
    intent: String,
}

#[derive(Debug, Deserialize)]
struct RoutingFixture {
    cases: Vec<RoutingCase>,
}

fn check_scenario(path: &str) {
    let scenario: GuideScenario = load_fixture(path);
    let guide = GardenGuide::new();
    let insights = guide.insights(&scenario.context);

    let actual: Vec<_> = insights
        .iter()
        .map(|i| (i.kind, i.priority, i.title.as_str(), i.life_area.as_deref()))
        .collect();
    let expected: Vec<_> = scenario
        .expected_insights
        .iter()
        .map(|e| (e.kind, e.priority, e.title.as_str(), e.life_area.as_deref()))
        .collect();
    assert_eq!(actual, expected, "{}: {}", path, scenario.description);

    assert_eq!(
        scenario.context.summary(),
        scenario.expected_summary,
        "{}: summary mismatch",
        path
    );
}

#[test]
fn golden_thriving_gardener() {
    check_scenario("golden/guide/thriving_gardener.json");
}

#[test]
fn golden_struggling_gardener() {
    check_scenario("golden/guide/struggling_gardener.json");
}

#[test]
fn golden_new_gardener() {
    check_scenario("golden/guide/new_gardener.json");
}

#[test]
fn every_guide_fixture_passes() {
    let files = list_fixtures("golden/guide");
    assert!(files.len() >= 3);
    for file in files {
        check_scenario(&relative_fixture_path(&file));
    }
}

#[test]
fn golden_chat_routing() {
    let fixture: RoutingFixture = load_fixture("golden/chat/routing.json");
    for case in fixture.cases {
        let expected = match case.intent.as_str() {
            "status" => ChatIntent::Status,
            "suggestion" => ChatIntent::Suggestion,
            "streak" => ChatIntent::Streak,
            "help" => ChatIntent::Help,
            "default" => ChatIntent::Default,
            other => panic!("unknown intent {other} in fixture"),
        };
        assert_eq!(
            tend_guide::chat::classify(&case.message),
            expected,
            "message: {}",
            case.message
        );
    }
}
