//! Best-configuration selection across datasets

use crate::stats::StatBlock;

/// Winners along the three comparison axes. Context-switch rate stands in
/// for lock contention, which the captures cannot measure directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub best_cpu: (String, f64),
    pub best_mem: (String, f64),
    pub best_ctx: (String, f64),
}

/// Pick the first entry with the strictly smallest value of `metric`.
/// Ties keep the earlier entry, so the outcome is deterministic for a
/// fixed input order.
fn min_by_metric(
    results: &[(String, StatBlock)],
    metric: impl Fn(&StatBlock) -> f64,
) -> Option<(String, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (name, stat) in results {
        let value = metric(stat);
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((name.as_str(), value)),
        }
    }
    best.map(|(name, value)| (name.to_string(), value))
}

/// Select the best configuration per axis. Returns `None` when there are
/// no results to compare.
pub fn verdict(results: &[(String, StatBlock)]) -> Option<Verdict> {
    Some(Verdict {
        best_cpu: min_by_metric(results, |s| s.cpu_avg)?,
        best_mem: min_by_metric(results, |s| s.mem_avg)?,
        best_ctx: min_by_metric(results, |s| s.ctx_avg)?,
    })
}

/// Conclusion lines, one per axis, in the fixed CPU / memory / context
/// switch order.
pub fn conclusion_lines(verdict: &Verdict) -> Vec<String> {
    vec![
        format!(
            "Lowest CPU utilization: {} (avg {:.1}%)",
            verdict.best_cpu.0, verdict.best_cpu.1
        ),
        format!(
            "Lowest memory footprint: {} (avg {:.1} MB)",
            verdict.best_mem.0, verdict.best_mem.1
        ),
        format!(
            "Fewest context switches: {} (avg {:.1}/s)",
            verdict.best_ctx.0, verdict.best_ctx.1
        ),
    ]
}
