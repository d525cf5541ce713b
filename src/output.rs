//! Text and JSON rendering of command results.

use anyhow::{Context, Result};
use serde::Serialize;

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Prints `value` as JSON, or the lines produced by `text` otherwise.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> Vec<String>,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(value)?),
        OutputFormat::Text => {
            for line in text(value) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        date: &'static str,
    }

    #[test]
    fn json_is_pretty() {
        let json = to_json(&Sample { date: "2024-01-01" }).unwrap();
        assert_eq!(json, "{\n  \"date\": \"2024-01-01\"\n}");
    }
}
