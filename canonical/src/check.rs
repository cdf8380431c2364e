//! Run the action validator over recorded documents.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::action::validate_action;
use crate::error::ValidationError;
use crate::io::action_log::{LogEntry, read_action_log};

/// Outcome of checking one or more actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every action passed.
    Valid { actions: usize },
    /// First rejected action, by 1-based source line.
    Rejected { line: usize, error: ValidationError },
}

/// Check every action in the log at `path`, stopping at the first rejection.
pub fn check_action_log(path: &Path) -> Result<CheckOutcome> {
    let entries = read_action_log(path)?;
    info!(path = %path.display(), actions = entries.len(), "checking action log");
    Ok(check_entries(&entries))
}

/// Check a single inline JSON action document.
pub fn check_action_str(raw: &str) -> Result<CheckOutcome> {
    let json: serde_json::Value = serde_json::from_str(raw).context("parse action json")?;
    let entry = LogEntry {
        line: 1,
        value: json.into(),
    };
    Ok(check_entries(std::slice::from_ref(&entry)))
}

fn check_entries(entries: &[LogEntry]) -> CheckOutcome {
    for entry in entries {
        if let Err(error) = validate_action(&entry.value) {
            debug!(line = entry.line, kind = error.kind(), "action rejected");
            return CheckOutcome::Rejected {
                line: entry.line,
                error,
            };
        }
    }
    CheckOutcome::Valid {
        actions: entries.len(),
    }
}
