use serde::Serialize;
use shoplens_core::{revenue_trend, DateRange, Endpoint, InsightsSource, RevenueSeriesPoint};

use crate::cli::TrendArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct TrendResponseData {
    range: Option<DateRange>,
    points: Vec<RevenueSeriesPoint>,
    total_revenue: f64,
}

pub async fn run(args: &TrendArgs, source: &dyn InsightsSource) -> Result<CommandResult, CliError> {
    let start = args.start.as_deref();
    let end = args.end.as_deref();
    let range = DateRange::from_bounds(start, end);
    let endpoints = vec![Endpoint::RevenueTrend];

    let partial_range = range.is_none()
        && (start.is_some_and(|value| !value.is_empty()) || end.is_some_and(|value| !value.is_empty()));

    let mut result = match revenue_trend(source, start, end).await {
        Ok(points) => {
            let total_revenue = points.iter().map(|point| point.revenue).sum();
            let data = serde_json::to_value(TrendResponseData {
                range,
                points,
                total_revenue,
            })?;
            CommandResult::ok(data, endpoints)
        }
        Err(error) => {
            tracing::warn!(error = %error, "revenue trend failed");
            let data = serde_json::to_value(TrendResponseData {
                range,
                points: Vec::new(),
                total_revenue: 0.0,
            })?;
            CommandResult::failed(data, endpoints, &error)
        }
    };

    if partial_range {
        result = result.with_warning(
            "date range ignored: both --start and --end are required; returned full history",
        );
    }

    Ok(result)
}
