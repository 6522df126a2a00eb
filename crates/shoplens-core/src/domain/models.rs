use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Store-wide summary totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_products: u64,
    pub total_customers: u64,
    pub total_orders: u64,
    pub total_quantity_sold: u64,
    pub total_revenue: f64,
}

impl Insights {
    pub fn new(
        total_products: u64,
        total_customers: u64,
        total_orders: u64,
        total_quantity_sold: u64,
        total_revenue: f64,
    ) -> Result<Self, ValidationError> {
        validate_amount("totalRevenue", total_revenue)?;

        Ok(Self {
            total_products,
            total_customers,
            total_orders,
            total_quantity_sold,
            total_revenue,
        })
    }
}

/// Customer ranked by total spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSpend {
    pub first_name: String,
    pub last_name: String,
    pub total_spent: f64,
}

impl CustomerSpend {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        total_spent: f64,
    ) -> Result<Self, ValidationError> {
        validate_amount("totalSpent", total_spent)?;

        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            total_spent,
        })
    }

    /// Display label, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Product ranked by revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRevenue {
    pub title: String,
    pub revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductRevenue {
    pub fn new(
        title: impl Into<String>,
        revenue: f64,
        image_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_amount("revenue", revenue)?;

        Ok(Self {
            title: title.into(),
            revenue,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

/// Monetary amounts must be finite and non-negative.
pub fn validate_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(value)
}

/// Counts arrive as JSON numbers; accept only non-negative integers.
pub fn validate_count(field: &'static str, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeValue { field })
}
