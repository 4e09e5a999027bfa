//! Summary statistics per dataset

use crate::loader::{Record, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("required column '{0}' missing from a record")]
    MissingColumn(String),
    #[error("column '{column}' has non-numeric value '{value}'")]
    NotNumeric { column: String, value: String },
}

/// Fixed set of summary statistics for one dataset. Every dataset yields
/// the same fields regardless of row count; empty columns fall back to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBlock {
    pub cpu_avg: f64,
    pub cpu_max: f64,
    pub cpu_p99: f64,
    pub mem_avg: f64,
    pub mem_max: f64,
    pub read_avg: f64,
    pub write_avg: f64,
    pub recv_avg: f64,
    pub send_avg: f64,
    pub ctx_avg: f64,
    pub ctx_max: f64,
    pub threads_avg: f64,
    pub threads_max: f64,
    pub threads_min: f64,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Nearest-rank percentile: the element at index `floor(len * p)` of the
/// ascending-sorted column, clamped to the last index. Empty input is 0.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let index = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[index]
}

fn numeric(field: &str, value: &Value) -> Result<f64, StatsError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Text(raw) => Err(StatsError::NotNumeric {
            column: field.to_string(),
            value: raw.clone(),
        }),
    }
}

/// Extract a required numeric column. A record without the field is a
/// lookup error; a cell that stayed text is a type error. Both are fatal
/// for the file being aggregated.
fn column(records: &[Record], field: &str) -> Result<Vec<f64>, StatsError> {
    records
        .iter()
        .map(|record| match record.get(field) {
            None => Err(StatsError::MissingColumn(field.to_string())),
            Some(value) => numeric(field, value),
        })
        .collect()
}

/// Like `column`, but a missing field defaults to 0 per record. Used for
/// `threads`, which older captures do not emit.
fn optional_column(records: &[Record], field: &str) -> Result<Vec<f64>, StatsError> {
    records
        .iter()
        .map(|record| match record.get(field) {
            None => Ok(0.0),
            Some(value) => numeric(field, value),
        })
        .collect()
}

/// Reduce one dataset's records to its summary statistics.
pub fn aggregate(records: &[Record]) -> Result<StatBlock, StatsError> {
    let cpu = column(records, "cpu%")?;
    let mem = column(records, "mem_mb")?;
    let read = column(records, "read_kb/s")?;
    let write = column(records, "write_kb/s")?;
    let recv = column(records, "recv_kb/s")?;
    let send = column(records, "send_kb/s")?;
    let ctx = column(records, "ctx_switch")?;
    let threads = optional_column(records, "threads")?;

    Ok(StatBlock {
        cpu_avg: mean(&cpu),
        cpu_max: max(&cpu),
        cpu_p99: percentile(&cpu, 0.99),
        mem_avg: mean(&mem),
        mem_max: max(&mem),
        read_avg: mean(&read),
        write_avg: mean(&write),
        recv_avg: mean(&recv),
        send_avg: mean(&send),
        ctx_avg: mean(&ctx),
        ctx_max: max(&ctx),
        threads_avg: mean(&threads),
        threads_max: max(&threads),
        threads_min: min(&threads),
    })
}
