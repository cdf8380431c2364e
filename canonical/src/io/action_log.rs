//! Newline-delimited JSON action logs.
//!
//! One action per line. Blank lines are skipped; line numbers stay 1-based against the
//! raw file so diagnostics point at the right place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::value::Value;

/// A parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub line: usize,
    pub value: Value,
}

/// Read and parse every non-blank line of the log at `path`.
pub fn read_action_log(path: &Path) -> Result<Vec<LogEntry>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let entries = parse_action_log(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), entries = entries.len(), "action log loaded");
    Ok(entries)
}

/// Parse log contents already in memory.
pub fn parse_action_log(contents: &str) -> Result<Vec<LogEntry>> {
    let mut entries = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let json: serde_json::Value =
            serde_json::from_str(raw).with_context(|| format!("line {line}: invalid json"))?;
        entries.push(LogEntry {
            line,
            value: Value::from(json),
        });
    }
    Ok(entries)
}
