//! Batch analyzer for performance-monitoring CSV captures.
//!
//! Each `monitor_<name>.csv` file in the working directory holds one tested
//! configuration's samples. The pipeline loads every file, reduces it to a
//! fixed set of summary statistics, prints a per-configuration report and
//! picks the best configuration by CPU, memory and context-switch rate.

pub mod compare;
pub mod loader;
pub mod report;
pub mod stats;
