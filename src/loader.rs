//! CSV ingestion for benchmark timing files
//!
//! Input files are headerless and comma-separated; columns are assigned by
//! position. Loading is all-or-nothing: one malformed row fails the whole
//! file.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// One overhead-benchmark measurement: `method,time`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    /// Synchronization method under test
    pub method: String,
    /// Elapsed time in seconds
    pub time: f32,
}

/// One dining-philosophers measurement: `method,n,time`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizedSample {
    /// Synchronization method under test
    pub method: String,
    /// Number of philosophers
    pub n: u32,
    /// Elapsed time in seconds
    pub time: f32,
}

/// Errors produced while parsing an input file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected {expected} fields, got {got}")]
    FieldCount {
        row: usize,
        expected: usize,
        got: usize,
    },
}

fn rows_from_reader<R, T>(input: R, expected: usize) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != expected {
            return Err(LoadError::FieldCount {
                row: idx + 1,
                expected,
                got: record.len(),
            });
        }
        rows.push(record.deserialize(None)?);
    }
    Ok(rows)
}

/// Parse `method,time` rows from any reader
pub fn samples_from_reader<R: Read>(input: R) -> Result<Vec<Sample>, LoadError> {
    rows_from_reader(input, 2)
}

/// Parse `method,n,time` rows from any reader
pub fn sized_samples_from_reader<R: Read>(input: R) -> Result<Vec<SizedSample>, LoadError> {
    rows_from_reader(input, 3)
}

/// Load `method,time` rows from a file
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let samples = samples_from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(rows = samples.len(), "loaded overhead samples");
    Ok(samples)
}

/// Load `method,n,time` rows from a file
pub fn load_sized_samples(path: &Path) -> Result<Vec<SizedSample>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let samples = sized_samples_from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(rows = samples.len(), "loaded dining samples");
    Ok(samples)
}
