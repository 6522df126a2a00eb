//! Boundary validation of raw JSON bodies into domain types.
//!
//! Fields are read by hand rather than through `#[derive(Deserialize)]` so
//! that a missing or mistyped field is reported with the index of the
//! element that carried it. Nothing is coerced: a missing amount is an
//! error, not a zero.

use serde_json::{Map, Value};

use crate::{
    validate_count, CustomerSpend, Insights, MalformedEventError, ProductRevenue, RevenueEvent,
    ValidationError,
};

type Object = Map<String, Value>;

#[derive(Debug)]
enum FieldIssue {
    Missing,
    Invalid(String),
}

#[derive(Debug)]
struct FieldError {
    field: &'static str,
    issue: FieldIssue,
}

impl FieldError {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            issue: FieldIssue::Missing,
        }
    }

    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            issue: FieldIssue::Invalid(reason.into()),
        }
    }

    fn at(self, index: usize) -> MalformedEventError {
        match self.issue {
            FieldIssue::Missing => MalformedEventError::MissingField {
                index,
                field: self.field,
            },
            FieldIssue::Invalid(reason) => MalformedEventError::InvalidField {
                index,
                field: self.field,
                reason,
            },
        }
    }

    fn in_object(self) -> MalformedEventError {
        let reason = match self.issue {
            FieldIssue::Missing => format!("missing field '{}'", self.field),
            FieldIssue::Invalid(reason) => format!("field '{}' {reason}", self.field),
        };
        MalformedEventError::InvalidPayload { reason }
    }
}

/// Amount checks live in the domain constructors; report them against the
/// field they name.
impl From<ValidationError> for FieldError {
    fn from(error: ValidationError) -> Self {
        let field = match &error {
            ValidationError::NonFiniteValue { field } | ValidationError::NegativeValue { field } => {
                *field
            }
            _ => "value",
        };
        Self::invalid(field, error.to_string())
    }
}

/// Parse the `revenue-trend` body: an array of `{date, revenue}` objects.
///
/// Fails on the first bad element; no partial output is returned.
pub fn parse_revenue_events(body: &str) -> Result<Vec<RevenueEvent>, MalformedEventError> {
    parse_records(body, |object| {
        let date = required_label(object, "date")?;
        let revenue = required_number(object, "revenue")?;
        Ok(RevenueEvent::new(date, revenue)?)
    })
}

/// Parse the `top-customers` body.
pub fn parse_top_customers(body: &str) -> Result<Vec<CustomerSpend>, MalformedEventError> {
    parse_records(body, |object| {
        Ok(CustomerSpend::new(
            required_text(object, "firstName")?,
            required_text(object, "lastName")?,
            required_number(object, "totalSpent")?,
        )?)
    })
}

/// Parse the `top-products` body. `imageUrl` may be absent, null or blank.
pub fn parse_top_products(body: &str) -> Result<Vec<ProductRevenue>, MalformedEventError> {
    parse_records(body, |object| {
        Ok(ProductRevenue::new(
            required_text(object, "title")?,
            required_number(object, "revenue")?,
            optional_text(object, "imageUrl")?,
        )?)
    })
}

/// Parse the `insights` body, a single object of totals.
pub fn parse_insights(body: &str) -> Result<Insights, MalformedEventError> {
    let value = parse_json(body)?;
    let object = value
        .as_object()
        .ok_or_else(|| MalformedEventError::InvalidPayload {
            reason: String::from("expected a JSON object"),
        })?;

    let read = || -> Result<Insights, FieldError> {
        Ok(Insights::new(
            required_count(object, "totalProducts")?,
            required_count(object, "totalCustomers")?,
            required_count(object, "totalOrders")?,
            required_count(object, "totalQuantitySold")?,
            required_number(object, "totalRevenue")?,
        )?)
    };
    read().map_err(FieldError::in_object)
}

fn parse_json(body: &str) -> Result<Value, MalformedEventError> {
    serde_json::from_str(body).map_err(|error| MalformedEventError::InvalidJson {
        reason: error.to_string(),
    })
}

fn parse_records<T, F>(body: &str, mut read: F) -> Result<Vec<T>, MalformedEventError>
where
    F: FnMut(&Object) -> Result<T, FieldError>,
{
    let value = parse_json(body)?;
    let Value::Array(elements) = value else {
        return Err(MalformedEventError::InvalidPayload {
            reason: String::from("expected a JSON array"),
        });
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let object = element
                .as_object()
                .ok_or(MalformedEventError::NotAnObject { index })?;
            read(object).map_err(|error| error.at(index))
        })
        .collect()
}

fn present<'o>(object: &'o Object, field: &'static str) -> Result<&'o Value, FieldError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(FieldError::missing(field)),
        Some(value) => Ok(value),
    }
}

fn required_text(object: &Object, field: &'static str) -> Result<String, FieldError> {
    present(object, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| FieldError::invalid(field, "must be a string"))
}

/// Date labels are opaque but must not be blank.
fn required_label(object: &Object, field: &'static str) -> Result<String, FieldError> {
    let label = required_text(object, field)?;
    if label.trim().is_empty() {
        return Err(FieldError::invalid(field, "must not be empty"));
    }
    Ok(label)
}

fn optional_text(object: &Object, field: &'static str) -> Result<Option<String>, FieldError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(FieldError::invalid(field, "must be a string")),
    }
}

fn required_number(object: &Object, field: &'static str) -> Result<f64, FieldError> {
    present(object, field)?
        .as_f64()
        .ok_or_else(|| FieldError::invalid(field, "must be a number"))
}

fn required_count(object: &Object, field: &'static str) -> Result<u64, FieldError> {
    let value = present(object, field)?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }
    match value.as_i64() {
        Some(count) => {
            validate_count(field, count).map_err(|error| FieldError::invalid(field, error.to_string()))
        }
        None => Err(FieldError::invalid(field, "must be an integer")),
    }
}
