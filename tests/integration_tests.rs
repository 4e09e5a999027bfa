//! End-to-end pipeline tests: CSV files on disk through to the verdict.

use monitor_report::{compare, loader, report, stats};
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "cpu%,mem_mb,read_kb/s,write_kb/s,recv_kb/s,send_kb/s,ctx_switch";

fn write_capture(dir: &TempDir, name: &str, rows: &[&str]) {
    let body = rows.join("\n");
    fs::write(
        dir.path().join(format!("monitor_{name}.csv")),
        format!("{HEADER}\n{body}\n"),
    )
    .unwrap();
}

fn run_pipeline(dir: &TempDir) -> Vec<(String, stats::StatBlock)> {
    let mut results = Vec::new();
    for path in loader::discover(dir.path()).unwrap() {
        let name = loader::dataset_name(&path);
        let records = loader::load(&path).unwrap();
        let stat = stats::aggregate(&records).unwrap();
        results.push((name, stat));
    }
    results
}

/// Two captures where A wins on CPU and B wins on memory.
#[test]
fn test_comparator_splits_cpu_and_memory_winners() {
    let dir = TempDir::new().unwrap();
    write_capture(
        &dir,
        "A",
        &[
            "10,900,1,2,3,4,5000",
            "12,920,1,2,3,4,5200",
            "11,910,1,2,3,4,5100",
        ],
    );
    write_capture(
        &dir,
        "B",
        &[
            "40,300,1,2,3,4,4000",
            "42,320,1,2,3,4,4200",
            "41,310,1,2,3,4,4100",
        ],
    );

    let results = run_pipeline(&dir);
    assert_eq!(results.len(), 2);

    let verdict = compare::verdict(&results).unwrap();
    assert_eq!(verdict.best_cpu.0, "A");
    assert_eq!(verdict.best_mem.0, "B");
    assert_eq!(verdict.best_ctx.0, "B");

    let lines = compare::conclusion_lines(&verdict);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Lowest CPU utilization: A"));
    assert!(lines[1].starts_with("Lowest memory footprint: B"));
    assert!(lines[2].starts_with("Fewest context switches: B"));
}

/// The averages printed by the reporter match the aggregated values after
/// one-decimal rounding: re-parsing the displayed number gives the same
/// rounded value back.
#[test]
fn test_displayed_averages_survive_reparse() {
    let dir = TempDir::new().unwrap();
    write_capture(
        &dir,
        "roundtrip",
        &["33,512,10,20,30,40,7000", "34,514,10,20,30,40,7300"],
    );

    let results = run_pipeline(&dir);
    let (name, stat) = &results[0];
    let text = report::summarize(name, stat);

    let cpu_line = text.lines().find(|l| l.contains("CPU:")).unwrap();
    // "  CPU: avg 33.5%, peak 34.0%, p99 34.0%"
    let displayed: f64 = cpu_line
        .split("avg ")
        .nth(1)
        .unwrap()
        .split('%')
        .next()
        .unwrap()
        .parse()
        .unwrap();
    let rounded = (stat.cpu_avg * 10.0).round() / 10.0;
    assert_eq!(displayed, rounded);
}

/// A capture missing a required column aborts aggregation for that file.
#[test]
fn test_missing_column_aborts_aggregation() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("monitor_broken.csv"),
        "cpu%,mem_mb\n10,200\n",
    )
    .unwrap();

    let path = &loader::discover(dir.path()).unwrap()[0];
    let records = loader::load(path).unwrap();
    assert!(stats::aggregate(&records).is_err());
}

/// Dataset names come from the file names, minus prefix and extension.
#[test]
fn test_dataset_names_follow_file_names() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir, "with_locks", &["10,200,1,2,3,4,5000"]);
    write_capture(&dir, "lockfree", &["10,200,1,2,3,4,5000"]);

    let results = run_pipeline(&dir);
    let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["lockfree", "with_locks"]);
}
