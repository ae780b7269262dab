use std::io::{self, Write};

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_value(&mut out, value, format, pretty)?;
    out.flush()?;
    Ok(())
}

fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => match value {
            Value::Array(items) => {
                for item in items {
                    writeln!(out, "{}", serde_json::to_string(item)?)?;
                }
            }
            other => writeln!(out, "{}", serde_json::to_string(other)?)?,
        },
    }
    Ok(())
}
