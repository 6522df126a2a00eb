use serde_json::Value;
use shoplens_core::{load_dashboard, Endpoint, InsightsSource};

use crate::error::CliError;

use super::CommandResult;

pub async fn run(source: &dyn InsightsSource) -> Result<CommandResult, CliError> {
    let endpoints = Endpoint::ALL.to_vec();
    match load_dashboard(source).await {
        Ok(snapshot) => Ok(CommandResult::ok(
            serde_json::to_value(snapshot)?,
            endpoints,
        )),
        Err(error) => Ok(CommandResult::failed(Value::Null, endpoints, &error)),
    }
}
