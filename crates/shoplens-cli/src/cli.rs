//! CLI argument definitions for shoplens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `insights` | Store-wide totals |
//! | `top-customers` | Customers ranked by spend |
//! | `top-products` | Products ranked by revenue |
//! | `trend` | Revenue per date, optionally within a date range |
//! | `dashboard` | All of the above in one snapshot |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `$SHOPLENS_API_URL` or `http://localhost:5000/shopify` | Backend address |
//! | `--timeout-ms` | `3000` | Per-request timeout |
//! | `--retries` | `0` | Retries for transient failures |
//! | `--mock` | `false` | Serve built-in sample data |
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! shoplens insights --pretty
//! shoplens trend --start 2024-01-01 --end 2024-01-31 --format table
//! shoplens dashboard --mock
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use shoplens_core::BASE_URL_ENV;

/// Store analytics from the shoplens backend.
#[derive(Debug, Parser)]
#[command(
    name = "shoplens",
    author,
    version,
    about = "Store analytics client: insights, top customers, top products and revenue trend"
)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = shoplens_core::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Retries for transient transport failures and 5xx/429 responses.
    #[arg(long, global = true, default_value_t = 0)]
    pub retries: u32,

    /// Serve built-in sample data instead of calling the backend.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing; amounts rounded to two decimals.
    Table,
    /// Single JSON envelope.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store-wide totals: products, customers, orders, quantity sold, revenue.
    Insights,

    /// Customers ranked by total spend.
    TopCustomers,

    /// Products ranked by revenue.
    TopProducts,

    /// Revenue per date.
    ///
    /// The range is applied only when both --start and --end are given and
    /// non-empty; otherwise the full history is returned.
    ///
    /// # Examples
    ///
    ///   shoplens trend
    ///   shoplens trend --start 2024-01-01 --end 2024-01-31
    Trend(TrendArgs),

    /// Insights, rankings and unfiltered trend in one snapshot.
    Dashboard,
}

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// Inclusive start date label, e.g. 2024-01-01.
    #[arg(long)]
    pub start: Option<String>,

    /// Inclusive end date label, e.g. 2024-01-31.
    #[arg(long)]
    pub end: Option<String>,
}
