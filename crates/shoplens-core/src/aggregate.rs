//! Per-date revenue aggregation for the trend chart.

use std::collections::HashMap;

use crate::{RevenueEvent, RevenueSeriesPoint};

/// Sum revenue events by date label.
///
/// Emits one point per distinct date, in the order each date first appears
/// in `events`. Events sharing a date are added together, never replaced,
/// so the total revenue of the output equals that of the input.
pub fn aggregate_revenue(events: &[RevenueEvent]) -> Vec<RevenueSeriesPoint> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(events.len());
    let mut points: Vec<RevenueSeriesPoint> = Vec::new();

    for event in events {
        match positions.get(event.date.as_str()) {
            Some(&position) => points[position].revenue += event.revenue,
            None => {
                positions.insert(event.date.as_str(), points.len());
                points.push(RevenueSeriesPoint {
                    date: event.date.clone(),
                    revenue: event.revenue,
                });
            }
        }
    }

    tracing::debug!(
        events = events.len(),
        points = points.len(),
        "aggregated revenue events by date"
    );
    points
}
