//! Delimited summary table for grouped timing statistics

use crate::stats::GroupStats;
use std::collections::BTreeMap;

/// Header row for the summary table
const HEADER: &str = "method,count,mean,std,min,25%,50%,75%,max";

/// Render per-method statistics as a comma-delimited table
///
/// One row per method, methods in lexicographic order (the map's iteration
/// order). The caller decides where the table goes; the binary prints it to
/// stdout.
pub fn render_table(groups: &BTreeMap<String, GroupStats>) -> String {
    let mut output = String::new();

    output.push_str(HEADER);
    output.push('\n');

    for (method, stats) in groups {
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            method,
            stats.count,
            stats.mean,
            stats.stddev,
            stats.min,
            stats.q1,
            stats.median,
            stats.q3,
            stats.max
        ));
    }

    output
}
