//! Monitoring capture discovery and CSV parsing

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Glob pattern the monitoring harness writes its captures under.
pub const CAPTURE_PATTERN: &str = "monitor_*.csv";

/// A single CSV cell after best-effort numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce a raw cell to a number, keeping the original text when the
    /// cell does not parse. The fallback is deliberate: non-numeric cells
    /// only become an error if a numeric computation later needs them.
    pub fn parse(raw: &str) -> Value {
        match raw.trim().parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

/// One CSV row, keyed by header name.
pub type Record = HashMap<String, Value>;

/// Find all monitoring captures under `dir`. Zero matches is a normal
/// outcome, not an error. The glob crate yields paths in sorted order,
/// which fixes the tie-breaking order downstream.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(CAPTURE_PATTERN);
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 path: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in glob::glob(pattern).context("invalid capture glob pattern")? {
        files.push(entry.context("failed to read directory entry")?);
    }
    debug!(count = files.len(), "discovered monitoring captures");
    Ok(files)
}

/// Configuration name embedded in a capture file name:
/// `monitor_baseline.csv` -> `baseline`.
pub fn dataset_name(path: &Path) -> String {
    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    stem.trim_start_matches("monitor_")
        .trim_end_matches(".csv")
        .to_string()
}

/// Parse one capture into records. Every cell goes through numeric
/// coercion; structural problems (unreadable file, ragged rows) are errors,
/// individual non-numeric cells are not.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("malformed row in {}", path.display()))?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(field, cell)| (field.to_string(), Value::parse(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}
