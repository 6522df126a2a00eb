use std::future::Future;
use std::pin::Pin;

use crate::data_source::{InsightsSource, SourceError};
use crate::{CustomerSpend, DateRange, Insights, ProductRevenue, RevenueEvent};

/// In-memory source for offline runs and tests.
///
/// Mirrors the backend's division of labour: the trend endpoint filters by
/// inclusive date range and returns events unaggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSource {
    insights: Insights,
    top_customers: Vec<CustomerSpend>,
    top_products: Vec<ProductRevenue>,
    revenue_events: Vec<RevenueEvent>,
}

impl FixtureSource {
    pub fn new(
        insights: Insights,
        top_customers: Vec<CustomerSpend>,
        top_products: Vec<ProductRevenue>,
        revenue_events: Vec<RevenueEvent>,
    ) -> Self {
        Self {
            insights,
            top_customers,
            top_products,
            revenue_events,
        }
    }

    /// Source that only serves the given revenue events.
    pub fn with_revenue_events(revenue_events: Vec<RevenueEvent>) -> Self {
        let total_revenue = revenue_events.iter().map(|event| event.revenue).sum();
        Self {
            insights: Insights {
                total_products: 0,
                total_customers: 0,
                total_orders: revenue_events.len() as u64,
                total_quantity_sold: 0,
                total_revenue,
            },
            top_customers: Vec::new(),
            top_products: Vec::new(),
            revenue_events,
        }
    }

    /// Small sample store used by the CLI `--mock` flag.
    pub fn demo() -> Self {
        let revenue_events = [
            ("2024-01-01", 1_250.0),
            ("2024-01-01", 310.5),
            ("2024-01-02", 980.0),
            ("2024-01-03", 1_410.25),
            ("2024-01-02", 120.0),
            ("2024-01-04", 760.0),
            ("2024-01-05", 2_045.75),
            ("2024-01-05", 99.0),
        ]
        .into_iter()
        .map(|(date, revenue)| RevenueEvent {
            date: date.to_owned(),
            revenue,
        })
        .collect::<Vec<_>>();
        let total_revenue = revenue_events.iter().map(|event| event.revenue).sum();

        let top_customers = [
            ("Asha", "Rao", 2_144.75),
            ("Daniel", "Okafor", 1_410.25),
            ("Mei", "Tanaka", 1_100.0),
            ("Luis", "Ortega", 760.0),
        ]
        .into_iter()
        .map(|(first_name, last_name, total_spent)| CustomerSpend {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            total_spent,
        })
        .collect();

        let top_products = [
            ("Stoneware Mug", 2_310.0, Some("https://cdn.example.test/mug.png")),
            ("Linen Apron", 1_655.75, None),
            ("Walnut Board", 1_250.0, Some("https://cdn.example.test/board.png")),
        ]
        .into_iter()
        .map(|(title, revenue, image_url)| ProductRevenue {
            title: title.to_owned(),
            revenue,
            image_url: image_url.map(str::to_owned),
        })
        .collect();

        Self {
            insights: Insights {
                total_products: 3,
                total_customers: 4,
                total_orders: revenue_events.len() as u64,
                total_quantity_sold: 17,
                total_revenue,
            },
            top_customers,
            top_products,
            revenue_events,
        }
    }
}

impl InsightsSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn insights<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Insights, SourceError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.insights.clone()) })
    }

    fn top_customers<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CustomerSpend>, SourceError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.top_customers.clone()) })
    }

    fn top_products<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ProductRevenue>, SourceError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.top_products.clone()) })
    }

    fn revenue_events<'a>(
        &'a self,
        range: Option<DateRange>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RevenueEvent>, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let events = match range {
                Some(range) => self
                    .revenue_events
                    .iter()
                    .filter(|event| range.contains(&event.date))
                    .cloned()
                    .collect(),
                None => self.revenue_events.clone(),
            };
            Ok(events)
        })
    }
}
