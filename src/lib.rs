//! Comparar - benchmark result analysis for lock benchmarks
//!
//! This library provides the shared pipeline behind the `comparar-summary`
//! and `comparar-plot` tools: CSV ingestion of timing observations, grouped
//! descriptive statistics, and comparison-chart construction.

use tracing_subscriber::EnvFilter;

pub mod chart;
pub mod cli;
pub mod loader;
pub mod stats;
pub mod summary;

/// Initialize the tracing subscriber for debug output
///
/// Controlled entirely by `RUST_LOG`; silent by default so diagnostics never
/// mix into the table written to stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
