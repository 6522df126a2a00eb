use std::io::{self, Write};

use serde_json::Value;
use shoplens_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(envelope: &Envelope<Value>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => write_table(&mut out, envelope)?,
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    writeln!(out, "source      : {}", envelope.meta.source)?;
    writeln!(
        out,
        "endpoints   : {}",
        envelope
            .meta
            .endpoints
            .iter()
            .map(|endpoint| endpoint.as_str())
            .collect::<Vec<_>>()
            .join(",")
    )?;
    writeln!(out, "latency_ms  : {}", envelope.meta.latency_ms)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    writeln!(out, "data:")?;
    write_value(out, &envelope.data, 1)?;

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            match error.index {
                Some(index) => writeln!(out, "  - {}: {} (element {index})", error.code, error.message)?,
                None => writeln!(out, "  - {}: {}", error.code, error.message)?,
            }
        }
    }

    Ok(())
}

fn write_value<W: Write>(out: &mut W, value: &Value, depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                if is_scalar(field) {
                    writeln!(out, "{indent}{key}: {}", scalar(field))?;
                } else {
                    writeln!(out, "{indent}{key}:")?;
                    write_value(out, field, depth + 1)?;
                }
            }
        }
        Value::Array(items) if items.is_empty() => writeln!(out, "{indent}(none)")?,
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(fields) if fields.values().all(is_scalar) => {
                        let row = fields
                            .iter()
                            .map(|(key, field)| format!("{key}={}", scalar(field)))
                            .collect::<Vec<_>>()
                            .join("  ");
                        writeln!(out, "{indent}- {row}")?;
                    }
                    other if is_scalar(other) => writeln!(out, "{indent}- {}", scalar(other))?,
                    other => {
                        writeln!(out, "{indent}-")?;
                        write_value(out, other, depth + 1)?;
                    }
                }
            }
        }
        other => writeln!(out, "{indent}{}", scalar(other))?,
    }
    Ok(())
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// Amounts are rounded to two decimals for display; counts stay integral.
fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Number(number) if number.is_f64() => {
            format!("{:.2}", number.as_f64().unwrap_or_default())
        }
        other => other.to_string(),
    }
}
