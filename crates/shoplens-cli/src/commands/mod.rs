mod dashboard;
mod insights;
mod rankings;
mod trend;

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use shoplens_core::{
    ApiConfig, Endpoint, Envelope, EnvelopeError, FixtureSource, HttpInsightsSource,
    InsightsSource, RetryConfig, SourceError,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub endpoints: Vec<Endpoint>,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value, endpoints: Vec<Endpoint>) -> Self {
        Self {
            data,
            endpoints,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Failed fetch: empty `data`, one structured error.
    pub fn failed(data: Value, endpoints: Vec<Endpoint>, error: &SourceError) -> Self {
        Self {
            data,
            endpoints,
            warnings: Vec::new(),
            errors: vec![EnvelopeError::from(error)],
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Process exit code for an envelope that carries source errors.
pub const SOURCE_FAILURE_EXIT_CODE: u8 = 3;

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let source = build_source(cli)?;
    execute(cli, source.as_ref()).await
}

/// Run the selected command against `source` and wrap the result.
pub async fn execute(cli: &Cli, source: &dyn InsightsSource) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Insights => insights::run(source).await?,
        Command::TopCustomers => rankings::customers(source).await?,
        Command::TopProducts => rankings::products(source).await?,
        Command::Trend(args) => trend::run(args, source).await?,
        Command::Dashboard => dashboard::run(source).await?,
    };

    let CommandResult {
        data,
        endpoints,
        warnings,
        errors,
    } = command_result;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut metadata = Metadata::new(source.name(), endpoints, latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta()?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

pub fn exit_code(envelope: &Envelope<Value>) -> u8 {
    if envelope.errors.is_empty() {
        0
    } else {
        SOURCE_FAILURE_EXIT_CODE
    }
}

/// A blank `--base-url` (e.g. `SHOPLENS_API_URL=` in `.env`) means unset.
fn api_config(cli: &Cli) -> Result<ApiConfig, CliError> {
    let config = match cli.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(base_url) => ApiConfig::new(base_url)?,
        None => ApiConfig::from_env()?,
    }
    .with_timeout_ms(cli.timeout_ms)?;

    Ok(if cli.retries > 0 {
        config.with_retry(RetryConfig::exponential(cli.retries))
    } else {
        config
    })
}

fn build_source(cli: &Cli) -> Result<Arc<dyn InsightsSource>, CliError> {
    if cli.mock {
        tracing::info!("serving built-in sample data");
        return Ok(Arc::new(FixtureSource::demo()));
    }

    let config = api_config(cli)?;
    tracing::info!(base_url = config.base_url(), "using analytics backend");
    Ok(Arc::new(HttpInsightsSource::new(config)?))
}
