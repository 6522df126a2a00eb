#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use shoplens_core::{
    aggregate_revenue, revenue_trend, DateRange, FixtureSource, InsightsSource, RevenueEvent,
};
use support::{http_source, FakeBackend};

#[derive(Clone)]
struct SourceCase {
    name: &'static str,
    source: Arc<dyn InsightsSource>,
}

fn store_events() -> Vec<RevenueEvent> {
    vec![
        RevenueEvent::new("2024-01-01", 100.0).expect("valid event"),
        RevenueEvent::new("2024-01-01", 50.0).expect("valid event"),
        RevenueEvent::new("2024-01-02", 20.0).expect("valid event"),
    ]
}

fn source_cases() -> Vec<SourceCase> {
    vec![
        SourceCase {
            name: "fixture",
            source: Arc::new(FixtureSource::with_revenue_events(store_events())),
        },
        SourceCase {
            name: "http",
            source: Arc::new(http_source(Arc::new(FakeBackend::store()))),
        },
    ]
}

#[tokio::test]
async fn unfiltered_events_are_returned_unaggregated() {
    for case in source_cases() {
        let events = case
            .source
            .revenue_events(None)
            .await
            .unwrap_or_else(|error| panic!("source '{}' failed: {error}", case.name));

        assert_eq!(events, store_events(), "source '{}': raw events", case.name);
    }
}

#[tokio::test]
async fn range_filter_is_inclusive_on_both_ends() {
    let range = DateRange::new("2024-01-02", "2024-01-02");

    for case in source_cases() {
        let events = case
            .source
            .revenue_events(Some(range.clone()))
            .await
            .unwrap_or_else(|error| panic!("source '{}' failed: {error}", case.name));

        assert_eq!(events.len(), 1, "source '{}': filtered count", case.name);
        assert_eq!(events[0].date, "2024-01-02", "source '{}'", case.name);
    }
}

#[tokio::test]
async fn inverted_range_yields_no_events() {
    let range = DateRange::new("2024-01-02", "2024-01-01");

    for case in source_cases() {
        let events = case
            .source
            .revenue_events(Some(range.clone()))
            .await
            .unwrap_or_else(|error| panic!("source '{}' failed: {error}", case.name));

        assert!(events.is_empty(), "source '{}': expected empty", case.name);
    }
}

#[tokio::test]
async fn trend_equals_aggregation_of_raw_events() {
    for case in source_cases() {
        let events = case
            .source
            .revenue_events(None)
            .await
            .unwrap_or_else(|error| panic!("source '{}' failed: {error}", case.name));
        let series = revenue_trend(case.source.as_ref(), None, None)
            .await
            .unwrap_or_else(|error| panic!("source '{}' trend failed: {error}", case.name));

        assert_eq!(series, aggregate_revenue(&events), "source '{}'", case.name);
    }
}

#[test]
fn sources_report_distinct_names() {
    let names = source_cases()
        .into_iter()
        .map(|case| case.source.name())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["fixture", "http"]);
}
