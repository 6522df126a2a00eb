use serde_json::Value;
use shoplens_core::{Endpoint, InsightsSource};

use crate::error::CliError;

use super::CommandResult;

pub async fn run(source: &dyn InsightsSource) -> Result<CommandResult, CliError> {
    let endpoints = vec![Endpoint::Insights];
    match source.insights().await {
        Ok(insights) => Ok(CommandResult::ok(
            serde_json::to_value(insights)?,
            endpoints,
        )),
        Err(error) => Ok(CommandResult::failed(Value::Null, endpoints, &error)),
    }
}
