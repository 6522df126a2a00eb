//! Fetch-then-aggregate pipelines built on an [`InsightsSource`].

use serde::{Deserialize, Serialize};

use crate::data_source::{InsightsSource, SourceError};
use crate::{
    aggregate_revenue, CustomerSpend, DateRange, Insights, ProductRevenue, RevenueSeriesPoint,
};

/// Chart-ready revenue trend for optional caller bounds.
///
/// The range is attached only when both bounds are present and non-empty.
/// The source filters; this function always performs the per-date summation.
/// Nothing is cached, so every call re-fetches.
pub async fn revenue_trend<S>(
    source: &S,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Vec<RevenueSeriesPoint>, SourceError>
where
    S: InsightsSource + ?Sized,
{
    let range = DateRange::from_bounds(start, end);
    tracing::debug!(source = source.name(), ?range, "fetching revenue trend");

    let events = source.revenue_events(range).await?;
    Ok(aggregate_revenue(&events))
}

/// Everything the dashboard view shows at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub insights: Insights,
    pub top_customers: Vec<CustomerSpend>,
    pub top_products: Vec<ProductRevenue>,
    pub revenue_trend: Vec<RevenueSeriesPoint>,
}

/// Load the summary, rankings and unfiltered trend.
///
/// The three summary endpoints are fetched concurrently; the first failure
/// aborts the whole snapshot.
pub async fn load_dashboard<S>(source: &S) -> Result<DashboardSnapshot, SourceError>
where
    S: InsightsSource + ?Sized,
{
    let (insights, top_customers, top_products) = tokio::try_join!(
        source.insights(),
        source.top_customers(),
        source.top_products(),
    )?;
    let revenue_trend = revenue_trend(source, None, None).await?;

    Ok(DashboardSnapshot {
        insights,
        top_customers,
        top_products,
        revenue_trend,
    })
}
