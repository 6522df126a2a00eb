//! # Shoplens Core
//!
//! Contracts, boundary validation and the revenue trend pipeline for the
//! shoplens store analytics client.
//!
//! ## Overview
//!
//! - **Typed domain models** for store insights, top customers, top products
//!   and revenue events
//! - **Request builder** with an injected base URL and optional date range
//! - **Boundary validation** of raw JSON into domain types, reporting the
//!   offending element on failure
//! - **Trend aggregation** summing revenue per date in first-seen order
//! - **Source trait** with an HTTP implementation and an in-memory fixture
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | HTTP and fixture sources |
//! | [`aggregate`] | Per-date revenue summation |
//! | [`config`] | Base URL, timeout and retry settings |
//! | [`data_source`] | Source trait, endpoints, fetch errors |
//! | [`domain`] | Domain models |
//! | [`envelope`] | Output envelope with metadata |
//! | [`error`] | Validation and payload errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`payload`] | JSON body validation |
//! | [`request`] | Endpoint request construction |
//! | [`retry`] | Retry policy for the HTTP source |
//! | [`trend`] | Fetch-then-aggregate pipelines |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shoplens_core::{revenue_trend, ApiConfig, HttpInsightsSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpInsightsSource::new(ApiConfig::from_env()?)?;
//!     let points = revenue_trend(&source, Some("2024-01-01"), Some("2024-01-31")).await?;
//!     println!("{} days with revenue", points.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / caller   │  optional (start, end)
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ InsightsSource  │────▶│ RequestBuilder   │
//! │ (http/fixture)  │     │ + HttpClient     │
//! └────────┬────────┘     └──────────────────┘
//!          │ validated RevenueEvent list
//!          ▼
//! ┌─────────────────┐
//! │ aggregate_      │  one point per date
//! │ revenue         │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use shoplens_core::{FetchErrorKind, SourceError};
//!
//! fn describe(error: &SourceError) -> String {
//!     match error {
//!         SourceError::Fetch(fetch) if fetch.kind() == FetchErrorKind::Status => {
//!             format!("backend refused: {}", fetch.message())
//!         }
//!         SourceError::Fetch(fetch) => format!("network problem: {}", fetch.message()),
//!         SourceError::Malformed { error, .. } => match error.index() {
//!             Some(index) => format!("bad record at position {index}"),
//!             None => String::from("unreadable payload"),
//!         },
//!     }
//! }
//! ```

pub mod adapters;
pub mod aggregate;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod payload;
pub mod request;
pub mod retry;
pub mod trend;

pub use adapters::{FixtureSource, HttpInsightsSource};

pub use aggregate::aggregate_revenue;

pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

pub use data_source::{Endpoint, FetchError, FetchErrorKind, InsightsSource, SourceError};

pub use domain::{
    validate_amount, validate_count, CustomerSpend, DateRange, Insights, ProductRevenue,
    RevenueEvent, RevenueSeriesPoint,
};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::{MalformedEventError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use payload::{parse_insights, parse_revenue_events, parse_top_customers, parse_top_products};

pub use request::{RequestBuilder, END_DATE_PARAM, START_DATE_PARAM};

pub use retry::{Backoff, RetryConfig};

pub use trend::{load_dashboard, revenue_trend, DashboardSnapshot};
