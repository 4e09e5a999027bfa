//! Per-dataset report formatting

use crate::stats::StatBlock;

/// Render one configuration's summary block. Pure formatting: one decimal
/// place throughout, except thread min/max which are whole counts.
pub fn summarize(name: &str, stat: &StatBlock) -> String {
    let mut out = format!("{name}:\n");
    out.push_str(&format!(
        "  CPU: avg {:.1}%, peak {:.1}%, p99 {:.1}%\n",
        stat.cpu_avg, stat.cpu_max, stat.cpu_p99
    ));
    out.push_str(&format!(
        "  Memory: avg {:.1} MB, peak {:.1} MB\n",
        stat.mem_avg, stat.mem_max
    ));
    out.push_str(&format!(
        "  Disk: read {:.1} KB/s, write {:.1} KB/s\n",
        stat.read_avg, stat.write_avg
    ));
    out.push_str(&format!(
        "  Network: recv {:.1} KB/s, send {:.1} KB/s\n",
        stat.recv_avg, stat.send_avg
    ));
    out.push_str(&format!(
        "  Context switches: avg {:.1}/s, peak {:.1}/s\n",
        stat.ctx_avg, stat.ctx_max
    ));
    out.push_str(&format!(
        "  Threads: avg {:.1}, min {:.0}, max {:.0}\n",
        stat.threads_avg, stat.threads_min, stat.threads_max
    ));
    out
}
