//! Behavior-driven tests for the revenue trend pipeline
//!
//! These tests verify what a caller of the trend pipeline observes: which
//! request reaches the backend, and what series comes back.

mod support;

use std::sync::Arc;

use shoplens_core::{
    load_dashboard, revenue_trend, FixtureSource, RevenueEvent, RevenueSeriesPoint,
    END_DATE_PARAM, START_DATE_PARAM,
};
use support::{http_source, FakeBackend};

fn point(date: &str, revenue: f64) -> RevenueSeriesPoint {
    RevenueSeriesPoint {
        date: date.to_owned(),
        revenue,
    }
}

// =============================================================================
// Trend: aggregation through the HTTP source
// =============================================================================

#[tokio::test]
async fn when_backend_returns_duplicate_dates_caller_gets_summed_points() {
    // Given: A backend whose trend payload repeats 2024-01-01
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    // When: The unfiltered trend is requested
    let series = revenue_trend(&source, None, None)
        .await
        .expect("trend should load");

    // Then: Same-date revenue is summed, in first-seen order
    assert_eq!(
        series,
        vec![point("2024-01-01", 150.0), point("2024-01-02", 20.0)]
    );
}

#[tokio::test]
async fn when_no_range_is_given_full_history_is_requested() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    revenue_trend(&source, None, None)
        .await
        .expect("trend should load");

    let requests = backend.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].query.is_empty(), "no range constraint expected");
    assert_eq!(
        requests[0].full_url(),
        "http://backend.test/shopify/revenue-trend"
    );
}

#[tokio::test]
async fn when_only_start_is_given_range_is_not_attached() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    let series = revenue_trend(&source, Some("2024-01-02"), None)
        .await
        .expect("trend should load");

    assert_eq!(series.len(), 2, "full history expected");
    assert!(backend.recorded_requests()[0].query.is_empty());
}

#[tokio::test]
async fn when_range_is_given_backend_filters_and_caller_aggregates() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    let series = revenue_trend(&source, Some("2024-01-01"), Some("2024-01-01"))
        .await
        .expect("trend should load");

    assert_eq!(series, vec![point("2024-01-01", 150.0)]);

    let request = &backend.recorded_requests()[0];
    assert_eq!(request.query_value(START_DATE_PARAM), Some("2024-01-01"));
    assert_eq!(request.query_value(END_DATE_PARAM), Some("2024-01-01"));
}

#[tokio::test]
async fn when_range_is_inverted_it_is_forwarded_unchanged() {
    // Given: A caller who swapped start and end
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    // When: The trend is requested
    let series = revenue_trend(&source, Some("2024-02-01"), Some("2024-01-01"))
        .await
        .expect("inverted range is not a local error");

    // Then: The request carries the range as given and the backend decides
    let request = &backend.recorded_requests()[0];
    assert_eq!(request.query_value(START_DATE_PARAM), Some("2024-02-01"));
    assert_eq!(request.query_value(END_DATE_PARAM), Some("2024-01-01"));
    assert!(series.is_empty());
}

#[tokio::test]
async fn every_trend_request_refetches() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    let first = revenue_trend(&source, None, None).await.expect("first load");
    let second = revenue_trend(&source, None, None).await.expect("second load");

    assert_eq!(first, second);
    assert_eq!(backend.recorded_requests().len(), 2, "no caching expected");
}

#[tokio::test]
async fn empty_backend_history_yields_empty_series() {
    let backend = Arc::new(
        FakeBackend::store().with_body("/revenue-trend", serde_json::json!([])),
    );
    let source = http_source(backend);

    let series = revenue_trend(&source, None, None)
        .await
        .expect("empty history is not an error");
    assert!(series.is_empty());
}

// =============================================================================
// Trend: in-memory source
// =============================================================================

#[tokio::test]
async fn fixture_source_feeds_the_same_pipeline() {
    let source = FixtureSource::with_revenue_events(vec![
        RevenueEvent::new("2024-03-02", 5.0).expect("valid"),
        RevenueEvent::new("2024-03-01", 1.0).expect("valid"),
        RevenueEvent::new("2024-03-02", 2.5).expect("valid"),
    ]);

    let series = revenue_trend(&source, None, None)
        .await
        .expect("fixture never fails");

    assert_eq!(
        series,
        vec![point("2024-03-02", 7.5), point("2024-03-01", 1.0)]
    );
}

// =============================================================================
// Dashboard snapshot
// =============================================================================

#[tokio::test]
async fn dashboard_loads_every_endpoint_once() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    let snapshot = load_dashboard(&source).await.expect("dashboard loads");

    assert_eq!(snapshot.insights.total_orders, 4);
    assert_eq!(snapshot.top_customers[0].full_name(), "Asha Rao");
    assert_eq!(snapshot.top_products.len(), 2);
    assert_eq!(snapshot.top_products[1].image_url, None);
    assert_eq!(
        snapshot.revenue_trend,
        vec![point("2024-01-01", 150.0), point("2024-01-02", 20.0)]
    );

    let mut paths = backend
        .recorded_requests()
        .into_iter()
        .map(|request| request.url)
        .collect::<Vec<_>>();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "http://backend.test/shopify/insights",
            "http://backend.test/shopify/revenue-trend",
            "http://backend.test/shopify/top-customers",
            "http://backend.test/shopify/top-products",
        ]
    );
}

#[tokio::test]
async fn dashboard_trend_is_unfiltered() {
    let backend = Arc::new(FakeBackend::store());
    let source = http_source(backend.clone());

    load_dashboard(&source).await.expect("dashboard loads");

    let trend_request = backend
        .recorded_requests()
        .into_iter()
        .find(|request| request.url.ends_with("/revenue-trend"))
        .expect("trend requested");
    assert!(trend_request.query.is_empty());
}
