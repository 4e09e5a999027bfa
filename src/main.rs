use anyhow::{Context, Result};
use monitor_report::{compare, loader, report, stats};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report itself.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let files = loader::discover(Path::new("."))?;
    if files.is_empty() {
        println!("No monitor_*.csv files found in the current directory");
        return Ok(());
    }

    // Aggregate every capture before printing anything, so a bad capture
    // aborts the run with no partial report.
    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let name = loader::dataset_name(path);
        let records = loader::load(path)?;
        info!(dataset = %name, rows = records.len(), "aggregating capture");
        let stat = stats::aggregate(&records)
            .with_context(|| format!("while aggregating {}", path.display()))?;
        results.push((name, stat));
    }

    println!("\n=== Performance test summary ===\n");
    for (name, stat) in &results {
        println!("{}", report::summarize(name, stat));
    }

    println!("\n=== Conclusion (auto-selected) ===");
    if let Some(verdict) = compare::verdict(&results) {
        for line in compare::conclusion_lines(&verdict) {
            println!("{line}");
        }
    }

    println!("\nAnalysis complete.");
    Ok(())
}
