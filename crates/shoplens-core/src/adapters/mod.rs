//! Source implementations.
//!
//! - [`HttpInsightsSource`] talks to the analytics REST backend.
//! - [`FixtureSource`] serves in-memory data for offline runs and tests.

mod fixture;
mod http;

pub use fixture::FixtureSource;
pub use http::HttpInsightsSource;
