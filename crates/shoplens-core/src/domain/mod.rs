//! # Domain Models
//!
//! Typed shapes for every payload the analytics backend returns.
//!
//! | Type | Endpoint | Description |
//! |------|----------|-------------|
//! | [`Insights`] | `insights` | Store-wide totals |
//! | [`CustomerSpend`] | `top-customers` | One customer and their total spend |
//! | [`ProductRevenue`] | `top-products` | One product and the revenue it earned |
//! | [`RevenueEvent`] | `revenue-trend` | One dated revenue amount, before aggregation |
//! | [`RevenueSeriesPoint`] | - | One aggregated point of the trend series |
//! | [`DateRange`] | `revenue-trend` | Optional inclusive date filter |
//!
//! Wire names are camelCase (`totalRevenue`, `firstName`, `imageUrl`) to
//! match the backend; Rust field names are snake_case.
//!
//! Monetary amounts are plain `f64`. Construction rejects non-finite and
//! negative values; rounding for display is left to the presentation layer.

mod models;
mod revenue;

pub use models::{
    validate_amount, validate_count, CustomerSpend, Insights, ProductRevenue,
};
pub use revenue::{DateRange, RevenueEvent, RevenueSeriesPoint};
