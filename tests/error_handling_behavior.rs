//! Behavior-driven tests for error handling
//!
//! These tests verify how fetch failures and malformed payloads surface to
//! the caller: distinct error kinds, the offending element's position, and
//! no partial output.

mod support;

use std::sync::Arc;

use serde_json::json;
use shoplens_core::{
    load_dashboard, revenue_trend, Endpoint, EnvelopeError, FetchErrorKind, HttpError,
    HttpResponse, MalformedEventError, SourceError,
};
use support::{http_source, FakeBackend};

// =============================================================================
// Malformed payloads
// =============================================================================

#[tokio::test]
async fn when_an_event_lacks_revenue_the_whole_trend_fails() {
    // Given: A trend payload whose second element has no revenue
    let backend = Arc::new(FakeBackend::store().with_body(
        "/revenue-trend",
        json!([
            {"date": "2024-01-01", "revenue": 100.0},
            {"date": "2024-01-01"},
            {"date": "2024-01-02", "revenue": 20.0}
        ]),
    ));
    let source = http_source(backend);

    // When: The trend is requested
    let result = revenue_trend(&source, None, None).await;

    // Then: A malformed-event error names the element; no series is returned
    let error = result.expect_err("malformed element must fail the request");
    assert_eq!(error.endpoint(), Endpoint::RevenueTrend);
    assert_eq!(
        error.as_malformed(),
        Some(&MalformedEventError::MissingField {
            index: 1,
            field: "revenue"
        })
    );
    assert!(!error.retryable());
}

#[tokio::test]
async fn when_an_event_lacks_date_it_is_not_zero_filled() {
    let backend = Arc::new(FakeBackend::store().with_body(
        "/revenue-trend",
        json!([{"revenue": 10.0}]),
    ));
    let source = http_source(backend);

    let error = revenue_trend(&source, None, None)
        .await
        .expect_err("must fail");
    let malformed = error.as_malformed().expect("malformed error");
    assert_eq!(malformed.index(), Some(0));
    assert!(error.to_string().contains("date"), "message: {error}");
}

#[tokio::test]
async fn when_trend_payload_is_an_object_it_is_rejected() {
    let backend = Arc::new(FakeBackend::store().with_body(
        "/revenue-trend",
        json!({"date": "2024-01-01", "revenue": 10.0}),
    ));
    let source = http_source(backend);

    let error = revenue_trend(&source, None, None)
        .await
        .expect_err("must fail");
    assert!(matches!(
        error.as_malformed(),
        Some(MalformedEventError::InvalidPayload { .. })
    ));
}

#[tokio::test]
async fn malformed_error_maps_to_envelope_error_with_index() {
    let backend = Arc::new(FakeBackend::store().with_body(
        "/top-customers",
        json!([
            {"firstName": "Asha", "lastName": "Rao", "totalSpent": 1.0},
            {"firstName": "Mei", "lastName": "Tanaka", "totalSpent": "lots"}
        ]),
    ));
    let source = http_source(backend);

    let error = load_dashboard(&source).await.expect_err("must fail");
    let envelope_error = EnvelopeError::from(&error);

    assert_eq!(envelope_error.code, "payload.malformed");
    assert_eq!(envelope_error.endpoint, Some(Endpoint::TopCustomers));
    assert_eq!(envelope_error.index, Some(1));
}

// =============================================================================
// Fetch failures
// =============================================================================

#[tokio::test]
async fn when_network_fails_caller_receives_fetch_error() {
    let backend = Arc::new(
        FakeBackend::store().with_scripted(vec![Err(HttpError::new("connection refused"))]),
    );
    let source = http_source(backend);

    let error = revenue_trend(&source, None, None)
        .await
        .expect_err("must fail");

    let SourceError::Fetch(fetch) = &error else {
        panic!("expected fetch error, got {error:?}");
    };
    assert_eq!(fetch.kind(), FetchErrorKind::Transport);
    assert!(fetch.message().contains("connection refused"));
    assert_eq!(error.code(), "fetch.transport");
}

#[tokio::test]
async fn when_backend_errors_status_is_reported() {
    let backend = Arc::new(
        FakeBackend::store().with_scripted(vec![Ok(HttpResponse::with_status(500, "boom"))]),
    );
    let source = http_source(backend.clone());

    let error = revenue_trend(&source, None, None)
        .await
        .expect_err("must fail");

    let SourceError::Fetch(fetch) = &error else {
        panic!("expected fetch error, got {error:?}");
    };
    assert_eq!(fetch.kind(), FetchErrorKind::Status);
    assert_eq!(fetch.http_status(), Some(500));
    assert_eq!(backend.recorded_requests().len(), 1, "no retry by default");
}

#[tokio::test]
async fn when_body_is_not_json_it_is_a_decode_failure() {
    let backend = Arc::new(
        FakeBackend::store().with_scripted(vec![Ok(HttpResponse::ok_json("<!doctype html>"))]),
    );
    let source = http_source(backend);

    let error = revenue_trend(&source, None, None)
        .await
        .expect_err("must fail");
    assert_eq!(error.code(), "fetch.decode");
}

#[tokio::test]
async fn when_endpoint_is_missing_dashboard_fails_as_a_whole() {
    let backend = Arc::new(FakeBackend::new().with_body("/insights", json!({
        "totalProducts": 1,
        "totalCustomers": 1,
        "totalOrders": 1,
        "totalQuantitySold": 1,
        "totalRevenue": 1.0
    })));
    let source = http_source(backend);

    let error = load_dashboard(&source).await.expect_err("must fail");
    assert_eq!(error.code(), "fetch.status");
}
