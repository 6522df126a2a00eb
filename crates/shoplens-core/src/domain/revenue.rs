use serde::{Deserialize, Serialize};

use super::models::validate_amount;
use crate::ValidationError;

/// One dated revenue amount as returned by the trend endpoint.
///
/// `date` is an opaque calendar label such as `"2024-01-05"`; it is
/// compared as a string and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEvent {
    pub date: String,
    pub revenue: f64,
}

impl RevenueEvent {
    pub fn new(date: impl Into<String>, revenue: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            date: date.into(),
            revenue: validate_amount("revenue", revenue)?,
        })
    }
}

/// Aggregated total for a single date label, ready for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeriesPoint {
    pub date: String,
    pub revenue: f64,
}

/// Inclusive date filter forwarded to the trend endpoint.
///
/// Neither format nor ordering is checked here; an inverted range is the
/// source's to reject or reinterpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Range from optional caller bounds.
    ///
    /// Returns `None` unless both bounds are present and non-empty, in which
    /// case the full unfiltered history is requested.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some(Self::new(start, end))
            }
            _ => None,
        }
    }

    /// Inclusive label comparison, used by in-memory sources.
    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }
}
