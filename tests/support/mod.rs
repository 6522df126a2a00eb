//! Shared test doubles for behavior tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use shoplens_core::{
    ApiConfig, HttpClient, HttpError, HttpInsightsSource, HttpRequest, HttpResponse,
    END_DATE_PARAM, START_DATE_PARAM,
};

pub const BASE_URL: &str = "http://backend.test/shopify";

/// In-process stand-in for the analytics backend.
///
/// Serves canned JSON per path and, like the real backend, filters the
/// revenue trend by inclusive `startDate`/`endDate` without aggregating.
#[derive(Debug, Default)]
pub struct FakeBackend {
    bodies: BTreeMap<&'static str, Value>,
    scripted: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, path: &'static str, body: Value) -> Self {
        self.bodies.insert(path, body);
        self
    }

    /// Responses returned before falling back to the canned bodies.
    pub fn with_scripted(self, responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        *self.scripted.lock().expect("script lock") = responses.into();
        self
    }

    pub fn store() -> Self {
        Self::new()
            .with_body(
                "/insights",
                json!({
                    "totalProducts": 3,
                    "totalCustomers": 2,
                    "totalOrders": 4,
                    "totalQuantitySold": 9,
                    "totalRevenue": 170.0
                }),
            )
            .with_body(
                "/top-customers",
                json!([
                    {"firstName": "Asha", "lastName": "Rao", "totalSpent": 150.0},
                    {"firstName": "Mei", "lastName": "Tanaka", "totalSpent": 20.0}
                ]),
            )
            .with_body(
                "/top-products",
                json!([
                    {"title": "Mug", "revenue": 120.0, "imageUrl": "https://cdn.test/mug.png"},
                    {"title": "Cap", "revenue": 50.0}
                ]),
            )
            .with_body(
                "/revenue-trend",
                json!([
                    {"date": "2024-01-01", "revenue": 100.0},
                    {"date": "2024-01-01", "revenue": 50.0},
                    {"date": "2024-01-02", "revenue": 20.0}
                ]),
            )
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request lock").clone()
    }

    fn respond(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        if let Some(scripted) = self.scripted.lock().expect("script lock").pop_front() {
            return scripted;
        }

        let Some(path) = request.url.strip_prefix(BASE_URL) else {
            return Ok(HttpResponse::with_status(404, "unknown host"));
        };
        let Some(body) = self.bodies.get(path) else {
            return Ok(HttpResponse::with_status(404, "not found"));
        };

        let body = match (
            path,
            request.query_value(START_DATE_PARAM),
            request.query_value(END_DATE_PARAM),
        ) {
            ("/revenue-trend", Some(start), Some(end)) => filter_by_date(body, start, end),
            _ => body.clone(),
        };

        Ok(HttpResponse::ok_json(body.to_string()))
    }
}

fn filter_by_date(body: &Value, start: &str, end: &str) -> Value {
    let Some(events) = body.as_array() else {
        return body.clone();
    };
    Value::Array(
        events
            .iter()
            .filter(|event| {
                event["date"]
                    .as_str()
                    .is_some_and(|date| start <= date && date <= end)
            })
            .cloned()
            .collect(),
    )
}

impl HttpClient for FakeBackend {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.respond(&request);
        self.requests.lock().expect("request lock").push(request);
        Box::pin(async move { response })
    }
}

pub fn config() -> ApiConfig {
    ApiConfig::new(BASE_URL).expect("valid base url")
}

pub fn http_source(backend: Arc<FakeBackend>) -> HttpInsightsSource {
    HttpInsightsSource::with_http_client(backend, config())
}
