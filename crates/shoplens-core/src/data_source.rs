//! Source trait and error types.
//!
//! This module defines the contract (`InsightsSource`) every analytics
//! backend implementation follows, along with the endpoint catalog and the
//! errors a fetch can produce.
//!
//! # Endpoints
//!
//! | Endpoint | Path | Request | Response |
//! |----------|------|---------|----------|
//! | Insights | `/insights` | - | [`Insights`] |
//! | TopCustomers | `/top-customers` | - | `Vec<`[`CustomerSpend`]`>` |
//! | TopProducts | `/top-products` | - | `Vec<`[`ProductRevenue`]`>` |
//! | RevenueTrend | `/revenue-trend` | `Option<`[`DateRange`]`>` | `Vec<`[`RevenueEvent`]`>` |
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplens_core::{revenue_trend, ApiConfig, HttpInsightsSource};
//!
//! async fn january(source: &HttpInsightsSource) -> Result<(), shoplens_core::SourceError> {
//!     let points = revenue_trend(source, Some("2024-01-01"), Some("2024-01-31")).await?;
//!     for point in &points {
//!         println!("{}: {:.2}", point.date, point.revenue);
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CustomerSpend, DateRange, Insights, MalformedEventError, ProductRevenue, RevenueEvent};

/// Backend endpoint, used for request building and envelope metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Insights,
    TopCustomers,
    TopProducts,
    RevenueTrend,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [
        Self::Insights,
        Self::TopCustomers,
        Self::TopProducts,
        Self::RevenueTrend,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insights => "insights",
            Self::TopCustomers => "top_customers",
            Self::TopProducts => "top_products",
            Self::RevenueTrend => "revenue_trend",
        }
    }

    /// Path segment appended to the configured base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Insights => "/insights",
            Self::TopCustomers => "/top-customers",
            Self::TopProducts => "/top-products",
            Self::RevenueTrend => "/revenue-trend",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, timeout or body read failure.
    Transport,
    /// Upstream answered with a non-success status.
    Status,
    /// Body was not parseable JSON.
    Decode,
}

/// Network or protocol failure talking to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    endpoint: Endpoint,
    message: String,
    status: Option<u16>,
    retryable: bool,
}

impl FetchError {
    pub fn transport(endpoint: Endpoint, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            endpoint,
            message: message.into(),
            status: None,
            retryable,
        }
    }

    pub fn status(endpoint: Endpoint, status: u16, retryable: bool) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            endpoint,
            message: format!("{endpoint} returned status {status}"),
            status: Some(status),
            retryable,
        }
    }

    pub fn decode(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            endpoint,
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::Status => "fetch.status",
            FetchErrorKind::Decode => "fetch.decode",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Any failure surfaced by a source call. Terminal for that request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed {endpoint} payload: {error}")]
    Malformed {
        endpoint: Endpoint,
        error: MalformedEventError,
    },
}

impl SourceError {
    pub fn malformed(endpoint: Endpoint, error: MalformedEventError) -> Self {
        Self::Malformed { endpoint, error }
    }

    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Fetch(error) => error.endpoint(),
            Self::Malformed { endpoint, .. } => *endpoint,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fetch(error) => error.code(),
            Self::Malformed { error, .. } => error.code(),
        }
    }

    pub const fn retryable(&self) -> bool {
        match self {
            Self::Fetch(error) => error.retryable(),
            Self::Malformed { .. } => false,
        }
    }

    pub fn as_malformed(&self) -> Option<&MalformedEventError> {
        match self {
            Self::Malformed { error, .. } => Some(error),
            Self::Fetch(_) => None,
        }
    }
}

/// Analytics backend contract.
///
/// Every method returns payloads that already passed boundary validation.
/// The revenue trend method filters by range only; summing events per date
/// is the caller's job (see [`aggregate_revenue`](crate::aggregate_revenue)).
///
/// Implementations must be `Send + Sync` so one source can serve concurrent
/// requests.
pub trait InsightsSource: Send + Sync {
    /// Short identifier recorded in envelope metadata.
    fn name(&self) -> &'static str;

    fn insights<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Insights, SourceError>> + Send + 'a>>;

    fn top_customers<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CustomerSpend>, SourceError>> + Send + 'a>>;

    fn top_products<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProductRevenue>, SourceError>> + Send + 'a>>;

    /// Raw revenue events, restricted to `range` when one is given.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Fetch`] when the request cannot be completed
    /// - [`SourceError::Malformed`] when an element fails validation
    fn revenue_events<'a>(
        &'a self,
        range: Option<DateRange>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RevenueEvent>, SourceError>> + Send + 'a>>;
}
