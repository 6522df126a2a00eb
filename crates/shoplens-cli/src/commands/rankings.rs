use serde::Serialize;
use shoplens_core::{CustomerSpend, Endpoint, InsightsSource, ProductRevenue};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CustomerRow {
    name: String,
    #[serde(flatten)]
    customer: CustomerSpend,
}

#[derive(Debug, Serialize)]
struct TopCustomersData {
    customers: Vec<CustomerRow>,
}

#[derive(Debug, Serialize)]
struct TopProductsData {
    products: Vec<ProductRevenue>,
}

pub async fn customers(source: &dyn InsightsSource) -> Result<CommandResult, CliError> {
    let endpoints = vec![Endpoint::TopCustomers];
    match source.top_customers().await {
        Ok(customers) => {
            let customers = customers
                .into_iter()
                .map(|customer| CustomerRow {
                    name: customer.full_name(),
                    customer,
                })
                .collect();
            let data = serde_json::to_value(TopCustomersData { customers })?;
            Ok(CommandResult::ok(data, endpoints))
        }
        Err(error) => {
            let data = serde_json::to_value(TopCustomersData {
                customers: Vec::new(),
            })?;
            Ok(CommandResult::failed(data, endpoints, &error))
        }
    }
}

pub async fn products(source: &dyn InsightsSource) -> Result<CommandResult, CliError> {
    let endpoints = vec![Endpoint::TopProducts];
    match source.top_products().await {
        Ok(products) => {
            let data = serde_json::to_value(TopProductsData { products })?;
            Ok(CommandResult::ok(data, endpoints))
        }
        Err(error) => {
            let data = serde_json::to_value(TopProductsData {
                products: Vec::new(),
            })?;
            Ok(CommandResult::failed(data, endpoints, &error))
        }
    }
}
