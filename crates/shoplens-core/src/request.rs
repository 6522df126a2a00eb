//! Request construction for each backend endpoint.

use crate::http_client::HttpRequest;
use crate::{ApiConfig, DateRange, Endpoint};

pub const START_DATE_PARAM: &str = "startDate";
pub const END_DATE_PARAM: &str = "endDate";

/// Builds endpoint requests against an injected [`ApiConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    config: ApiConfig,
}

impl RequestBuilder {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Plain GET for `endpoint` with no query constraint.
    pub fn endpoint(&self, endpoint: Endpoint) -> HttpRequest {
        HttpRequest::get(format!("{}{}", self.config.base_url(), endpoint.path()))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms())
    }

    /// Trend request, with `startDate`/`endDate` attached only when a range
    /// is given. Bounds are forwarded exactly as supplied.
    pub fn revenue_trend(&self, range: Option<&DateRange>) -> HttpRequest {
        let request = self.endpoint(Endpoint::RevenueTrend);
        match range {
            Some(range) => request
                .with_query(START_DATE_PARAM, range.start.as_str())
                .with_query(END_DATE_PARAM, range.end.as_str()),
            None => request,
        }
    }
}
