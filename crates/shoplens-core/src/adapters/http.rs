use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::data_source::{Endpoint, FetchError, InsightsSource, SourceError};
use crate::http_client::{HttpClient, HttpError, HttpRequest, ReqwestHttpClient};
use crate::payload::{parse_insights, parse_revenue_events, parse_top_customers, parse_top_products};
use crate::request::RequestBuilder;
use crate::{
    ApiConfig, CustomerSpend, DateRange, Insights, MalformedEventError, ProductRevenue,
    RevenueEvent,
};

/// Source backed by the analytics REST backend.
#[derive(Clone)]
pub struct HttpInsightsSource {
    http_client: Arc<dyn HttpClient>,
    requests: RequestBuilder,
}

impl HttpInsightsSource {
    /// Source using the reqwest transport.
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        Ok(Self::with_http_client(
            Arc::new(ReqwestHttpClient::new()?),
            config,
        ))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ApiConfig) -> Self {
        Self {
            http_client,
            requests: RequestBuilder::new(config),
        }
    }

    pub fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    /// Execute `request`, retrying transient failures per the configured
    /// policy, and return the success body.
    async fn fetch_body(&self, endpoint: Endpoint, request: HttpRequest) -> Result<String, FetchError> {
        let retry = self.requests.config().retry();
        let budget = retry.budget();
        let mut attempt = 0_u32;

        loop {
            tracing::debug!(%endpoint, url = %request.full_url(), attempt, "requesting");

            let error = match self.http_client.execute(request.clone()).await {
                Ok(response) if response.is_success() => return Ok(response.body),
                Ok(response) => FetchError::status(
                    endpoint,
                    response.status,
                    retry.should_retry_status(response.status),
                ),
                Err(error) => FetchError::transport(
                    endpoint,
                    format!("{endpoint} transport error: {}", error.message()),
                    error.retryable() && retry.retry_on_transport,
                ),
            };

            if !error.retryable() || attempt >= budget {
                tracing::warn!(%endpoint, attempt, error = %error, "fetch failed");
                return Err(error);
            }

            let delay = retry.delay_for_attempt(attempt);
            tracing::warn!(
                %endpoint,
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "retrying after transient failure"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn fetch_parsed<T>(
        &self,
        endpoint: Endpoint,
        request: HttpRequest,
        parse: fn(&str) -> Result<T, MalformedEventError>,
    ) -> Result<T, SourceError> {
        let body = self.fetch_body(endpoint, request).await?;
        parse(&body).map_err(|error| classify_parse_error(endpoint, error))
    }
}

/// Bodies that are not JSON at all are protocol failures, not bad records.
fn classify_parse_error(endpoint: Endpoint, error: MalformedEventError) -> SourceError {
    match error {
        MalformedEventError::InvalidJson { reason } => {
            FetchError::decode(endpoint, format!("{endpoint} returned invalid JSON: {reason}"))
                .into()
        }
        error => SourceError::malformed(endpoint, error),
    }
}

impl InsightsSource for HttpInsightsSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn insights<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Insights, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.requests.endpoint(Endpoint::Insights);
            self.fetch_parsed(Endpoint::Insights, request, parse_insights)
                .await
        })
    }

    fn top_customers<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CustomerSpend>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.requests.endpoint(Endpoint::TopCustomers);
            self.fetch_parsed(Endpoint::TopCustomers, request, parse_top_customers)
                .await
        })
    }

    fn top_products<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProductRevenue>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.requests.endpoint(Endpoint::TopProducts);
            self.fetch_parsed(Endpoint::TopProducts, request, parse_top_products)
                .await
        })
    }

    fn revenue_events<'a>(
        &'a self,
        range: Option<DateRange>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RevenueEvent>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.requests.revenue_trend(range.as_ref());
            self.fetch_parsed(Endpoint::RevenueTrend, request, parse_revenue_events)
                .await
        })
    }
}
