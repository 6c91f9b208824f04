//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Expand `-` into lines read from stdin.
pub fn expand_stdin(args: &[String]) -> Result<Vec<String>> {
    if args.iter().any(|a| a == "-") {
        let mut lines: Vec<String> = args.iter().filter(|a| *a != "-").cloned().collect();
        lines.extend(read_lines(io::stdin().lock())?);
        Ok(lines)
    } else {
        Ok(args.to_vec())
    }
}

/// Read non-empty trimmed lines.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<JsonValue> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Serialize to JSON, pretty or compact.
pub fn to_json(value: &impl Serialize, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}
